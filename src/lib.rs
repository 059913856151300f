// ==========================================
// 货运跟踪系统 - 核心库
// ==========================================
// 依据: 货运跟踪系统_运输状态派生方案_v1.0.md
// 系统定位: 运输状态派生核心 (纯函数, 无持久化, 无 I/O)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与值对象
pub mod domain;

// 搬运事件层 - 外部观测数据
pub mod handling;

// 引擎层 - 运输状态派生
pub mod engine;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{HandlingEventType, RoutingStatus};

// 领域实体与值对象
pub use domain::{
    DomainError, DomainResult, Itinerary, Leg, Location, RouteSpecification, UnLocode,
};

// 搬运事件
pub use handling::HandlingEvent;

// 派生引擎
pub use engine::{Delivery, DeliveryView};

/// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
