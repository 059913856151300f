// ==========================================
// 货运跟踪系统 - 演示主入口
// ==========================================
// 职责: 构造香港 -> 达拉斯示例场景, 派生并输出运输状态
// ==========================================

use anyhow::{Context, Result};
use chrono::NaiveDate;
use shipping_tracking::domain::{Itinerary, Leg, Location, RouteSpecification, UnLocode};
use shipping_tracking::engine::Delivery;
use shipping_tracking::handling::HandlingEvent;
use shipping_tracking::logging;
use shipping_tracking::HandlingEventType;

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .with_context(|| format!("非法日期: {}-{}-{}", year, month, day))
}

fn location(code: &str, name: &str) -> Result<Location> {
    Ok(Location::new(UnLocode::new(code.to_string())?, name.to_string()))
}

fn main() -> Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("货运跟踪系统 - 运输状态派生核心");
    tracing::info!("系统版本: {}", shipping_tracking::VERSION);
    tracing::info!("==================================================");

    // 示例路线: 香港 -> 达拉斯, 经停长滩
    let origin = location("HKG", "Hong Kong")?;
    let port = location("LGB", "Long Beach")?;
    let destination = location("DAL", "Dallas")?;

    let route_spec = RouteSpecification::new(
        origin.clone(),
        destination.clone(),
        date(2013, 7, 1)?,
    );
    tracing::info!("路线规格: {}", route_spec);

    let itinerary = Itinerary::new(vec![
        Leg::new(
            "Voyage ABC".to_string(),
            origin,
            date(2013, 6, 14)?,
            port.clone(),
            date(2013, 6, 19)?,
        ),
        Leg::new(
            "Voyage DEF".to_string(),
            port,
            date(2013, 6, 21)?,
            destination.clone(),
            date(2013, 6, 24)?,
        ),
    ])?;
    tracing::info!("航程计划: {}", itinerary);

    // 最近事件: 在目的地卸货
    let last_event = HandlingEvent::new(
        HandlingEventType::Unload,
        destination,
        date(2013, 6, 24)?,
        date(2013, 6, 24)?,
        None,
    );
    tracing::info!("最近搬运事件: {}", last_event);

    // 派生运输状态
    let delivery = Delivery::derived_from(&route_spec, Some(&itinerary), Some(&last_event));
    let view = delivery.to_view();

    tracing::info!("派生结果: {}", view);
    tracing::info!("JSON 快照:\n{}", serde_json::to_string_pretty(&view)?);

    Ok(())
}
