// ==========================================
// 货运跟踪系统 - 搬运事件层
// ==========================================
// 职责: 定义外部事件记录子系统产出的数据形状
// 红线: 本核心不采集/不存储/不查询历史事件
// ==========================================

pub mod event;

// 重导出核心类型
pub use event::HandlingEvent;
