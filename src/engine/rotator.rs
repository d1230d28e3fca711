// ==========================================
// 炉批自动组批系统 - 炉台轮转分配器
// ==========================================
// 职责: 批次 -> 炉台 的轮转 (round-robin) 分配
// 红线: 每台炉每周期最多接 n_per_cycle 批
// 作用域: 单次运行内单个材料组,组间不共享状态
// ==========================================

use crate::domain::resource::Resource;
use std::collections::HashMap;

// ==========================================
// ResourceRotator - 轮转分配器
// ==========================================
#[derive(Debug, Default)]
pub struct ResourceRotator {
    pointer: usize,
    usage: HashMap<String, u32>,
}

impl ResourceRotator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 分配一台炉台
    ///
    /// 从轮转指针处开始循环扫描至多 `resources.len()` 步；每一步无论结果都前移指针，
    /// 遇到已用次数 < n_per_cycle 的炉台即计数 +1 并返回。
    ///
    /// # 参数
    /// - `resources`: 本材料组的可用炉台（按炉台代码升序）
    ///
    /// # 返回
    /// - Some(&Resource): 分配成功
    /// - None: 所有炉台配额已用尽（不是错误，调用方跳过该批次）
    pub fn assign<'a>(&mut self, resources: &'a [Resource]) -> Option<&'a Resource> {
        let len = resources.len();
        if len == 0 {
            return None;
        }

        for _ in 0..len {
            let resource = &resources[self.pointer % len];
            self.pointer = (self.pointer + 1) % len;

            let used = self.usage.entry(resource.resource_id.clone()).or_insert(0);
            if *used < resource.n_per_cycle {
                *used += 1;
                return Some(resource);
            }
        }

        None
    }

    /// 炉台已分配批次数
    pub fn usage_of(&self, resource_id: &str) -> u32 {
        self.usage.get(resource_id).copied().unwrap_or(0)
    }

    /// 当前轮转指针
    pub fn pointer(&self) -> usize {
        self.pointer
    }
}
