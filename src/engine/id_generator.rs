// ==========================================
// 炉批自动组批系统 - 工单号生成器
// ==========================================
// 红线: 运行内与跨运行均不得重复
// ==========================================

use crate::config::WorkOrderIdStrategy;
use uuid::Uuid;

/// 工单号生成接口
pub trait WorkOrderIdGenerator {
    fn next_id(&mut self) -> String;
}

/// UUID v4 工单号
#[derive(Debug, Default)]
pub struct UuidIdGenerator;

impl WorkOrderIdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// 运行级前缀 + 单调序号，例如 `RUN42-000001`
///
/// 跨运行唯一依赖调用方为每次运行提供不同前缀。
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: u64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            counter: 0,
        }
    }
}

impl WorkOrderIdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        self.counter += 1;
        format!("{}-{:06}", self.prefix, self.counter)
    }
}

/// 按配置构建生成器（每次运行新建）
pub fn id_generator_for(strategy: &WorkOrderIdStrategy) -> Box<dyn WorkOrderIdGenerator> {
    match strategy {
        WorkOrderIdStrategy::Uuid => Box::new(UuidIdGenerator),
        WorkOrderIdStrategy::Sequential { prefix } => Box::new(SequentialIdGenerator::new(prefix)),
    }
}
