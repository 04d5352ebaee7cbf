//! # vox-tool
//!
//! The tool catalog exposed to the realtime agent: a [`ToolRegistry`] of
//! travel-deal and sports-betting primitives over the mock catalogs, plus
//! the dispatch boundary that turns every failure into a structured
//! `{"error": ...}` envelope.

pub mod betting;
pub mod registry;
pub mod travel;

pub use registry::ToolRegistry;

use std::sync::Arc;
use vox_session::SessionStore;

fn register_travel(registry: &mut ToolRegistry, store: &Arc<SessionStore>) {
    registry.register(Arc::new(travel::SearchDealsTool));
    registry.register(Arc::new(travel::GetDealDetailsTool));
    registry.register(Arc::new(travel::GetUrgentDealsTool));
    registry.register(Arc::new(travel::GetBestValueDealsTool));
    registry.register(Arc::new(travel::GetLuxuryDealsTool));
    registry.register(Arc::new(travel::GetBudgetDealsTool));
    registry.register(Arc::new(travel::CompareDealsTool));
    registry.register(Arc::new(travel::AddToCartTool::new(Arc::clone(store))));
    registry.register(Arc::new(travel::ViewCartTool::new(Arc::clone(store))));
    registry.register(Arc::new(travel::RemoveFromCartTool::new(Arc::clone(store))));
    registry.register(Arc::new(travel::ClearCartTool::new(Arc::clone(store))));
    registry.register(Arc::new(travel::SavePreferenceTool::new(Arc::clone(store))));
    registry.register(Arc::new(travel::GetPreferencesTool::new(Arc::clone(store))));
    registry.register(Arc::new(travel::GetAvailableCitiesTool));
    registry.register(Arc::new(travel::GetDistanceTool));
}

fn register_betting(registry: &mut ToolRegistry, store: &Arc<SessionStore>) {
    registry.register(Arc::new(betting::SearchEventsTool));
    registry.register(Arc::new(betting::GetEventOddsTool));
    registry.register(Arc::new(betting::GetBetTypesTool));
    registry.register(Arc::new(betting::AddToBetSlipTool::new(Arc::clone(store))));
    registry.register(Arc::new(betting::ViewBetSlipTool::new(Arc::clone(store))));
    registry.register(Arc::new(betting::RemoveFromBetSlipTool::new(Arc::clone(store))));
    registry.register(Arc::new(betting::ClearBetSlipTool::new(Arc::clone(store))));
    registry.register(Arc::new(betting::PlaceBetTool::new(Arc::clone(store))));
}

/// Registry with the travel tool set only.
pub fn travel_registry(store: Arc<SessionStore>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    register_travel(&mut registry, &store);
    registry
}

/// Registry with the sports-betting tool set only.
pub fn betting_registry(store: Arc<SessionStore>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    register_betting(&mut registry, &store);
    registry
}

/// Every tool from both domains in one registry.
pub fn full_registry(store: Arc<SessionStore>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    register_travel(&mut registry, &store);
    register_betting(&mut registry, &store);
    registry
}
