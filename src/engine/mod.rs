// ==========================================
// 货运跟踪系统 - 引擎层
// ==========================================
// 依据: 货运跟踪系统_运输状态派生方案_v1.0.md - 第 4 节
// ==========================================
// 职责: 从 (路线规格, 航程计划?, 最近事件?) 派生运输状态
// 红线: 纯函数, 不修改输入, 不访问外部资源
// ==========================================

pub mod delivery;

// 重导出核心引擎
pub use delivery::{Delivery, DeliveryView};
