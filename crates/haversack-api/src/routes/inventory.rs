//! Routes for the slot inventory bounded context.

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use haversack_inventory::application::command_handlers::{self, InventoryCommandResult};
use haversack_inventory::application::query_handlers::{
    self, InventorySnapshotView, InventoryView, ItemCountView,
};
use haversack_inventory::domain::commands;
use haversack_inventory::domain::config::{InventoryConfig, InventoryLayout};
use haversack_inventory::domain::container::{AddOutcome, DroppedItem, SlotRecord};
use haversack_inventory::domain::events::{ItemOrigin, ItemUsed};

use crate::error::ApiError;
use crate::state::AppState;

fn default_quantity() -> u32 {
    1
}

/// Request body for POST /create.
///
/// Layout fields left out fall back to the server's configured layout.
#[derive(Debug, Deserialize)]
pub struct CreateInventoryRequest {
    /// Identifier for the new inventory; generated when absent.
    pub inventory_id: Option<Uuid>,
    /// Grid rows.
    pub rows: Option<u16>,
    /// Grid columns.
    pub columns: Option<u16>,
    /// Action-bar slots.
    pub action_bar_slots: Option<u16>,
}

/// Request body for POST /add-item.
#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    /// The inventory to add to.
    pub inventory_id: Uuid,
    /// Catalog key of the item.
    pub item_key: String,
    /// Units to add.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Where the items come from.
    #[serde(default)]
    pub origin: ItemOrigin,
}

/// Request body for POST /remove-item.
#[derive(Debug, Deserialize)]
pub struct RemoveItemRequest {
    /// The inventory to remove from.
    pub inventory_id: Uuid,
    /// Catalog key of the item.
    pub item_key: String,
    /// Units to remove.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

/// Request body for POST /remove-slot and POST /use-item.
#[derive(Debug, Deserialize)]
pub struct SlotRequest {
    /// The inventory.
    pub inventory_id: Uuid,
    /// The slot.
    pub slot: usize,
}

/// Request body for POST /drop-item.
#[derive(Debug, Deserialize)]
pub struct DropItemRequest {
    /// The inventory to drop from.
    pub inventory_id: Uuid,
    /// The slot to drop from.
    pub slot: usize,
    /// Units to drop; the whole stack when absent.
    pub quantity: Option<u32>,
}

/// Request body for POST /swap.
#[derive(Debug, Deserialize)]
pub struct SwapRequest {
    /// The inventory.
    pub inventory_id: Uuid,
    /// First slot.
    pub from_slot: usize,
    /// Second slot.
    pub to_slot: usize,
}

/// Request body for POST /combine.
#[derive(Debug, Deserialize)]
pub struct CombineRequest {
    /// The inventory.
    pub inventory_id: Uuid,
    /// Slot to take items from.
    pub source_slot: usize,
    /// Slot to put them on.
    pub target_slot: usize,
}

/// Request body for POST /split.
#[derive(Debug, Deserialize)]
pub struct SplitRequest {
    /// The inventory.
    pub inventory_id: Uuid,
    /// Slot to split.
    pub source_slot: usize,
    /// Units for the new stack.
    pub quantity: u32,
}

/// Response body returned after a command is successfully handled.
#[derive(Debug, Serialize)]
pub struct CommandResponse<T> {
    /// The affected inventory.
    pub aggregate_id: Uuid,
    /// IDs of the domain events produced and persisted.
    pub event_ids: Vec<Uuid>,
    /// What the command did.
    pub outcome: T,
}

impl<T> From<InventoryCommandResult<T>> for CommandResponse<T> {
    fn from(result: InventoryCommandResult<T>) -> Self {
        Self {
            aggregate_id: result.aggregate_id,
            event_ids: result.stored_events.iter().map(|e| e.event_id).collect(),
            outcome: result.outcome,
        }
    }
}

/// POST /create
#[instrument(skip(state, request))]
async fn create_inventory(
    State(state): State<AppState>,
    Json(request): Json<CreateInventoryRequest>,
) -> Result<Json<CommandResponse<InventoryConfig>>, ApiError> {
    let defaults = state.inventory_config.layout;
    let layout = InventoryLayout::new(
        request.rows.unwrap_or(defaults.rows()),
        request.columns.unwrap_or(defaults.columns()),
        request
            .action_bar_slots
            .unwrap_or(defaults.action_bar_slots()),
    )
    .map_err(|e| ApiError(e.into()))?;
    let command = commands::CreateInventory {
        correlation_id: Uuid::new_v4(),
        inventory_id: request.inventory_id.unwrap_or_else(Uuid::new_v4),
        config: InventoryConfig {
            layout,
            ..state.inventory_config
        },
    };

    info!(
        inventory_id = %command.inventory_id,
        correlation_id = %command.correlation_id,
        "handling create_inventory command"
    );

    let result = command_handlers::handle_create_inventory(
        &command,
        state.clock.as_ref(),
        &*state.event_repository,
        &state.observers,
    )
    .await?;

    Ok(Json(CommandResponse {
        aggregate_id: result.aggregate_id,
        event_ids: result.stored_events.iter().map(|e| e.event_id).collect(),
        outcome: command.config,
    }))
}

/// POST /add-item
#[instrument(skip(state, request), fields(inventory_id = %request.inventory_id, item = %request.item_key))]
async fn add_item(
    State(state): State<AppState>,
    Json(request): Json<AddItemRequest>,
) -> Result<Json<CommandResponse<AddOutcome>>, ApiError> {
    let command = commands::AddItem {
        correlation_id: Uuid::new_v4(),
        inventory_id: request.inventory_id,
        item_key: request.item_key,
        quantity: request.quantity,
        origin: request.origin,
    };

    info!(correlation_id = %command.correlation_id, "handling add_item command");

    let result = command_handlers::handle_add_item(
        &command,
        state.catalog.as_ref(),
        state.clock.as_ref(),
        &*state.event_repository,
        &state.observers,
    )
    .await?;

    Ok(Json(result.into()))
}

/// POST /remove-item
#[instrument(skip(state, request), fields(inventory_id = %request.inventory_id, item = %request.item_key))]
async fn remove_item(
    State(state): State<AppState>,
    Json(request): Json<RemoveItemRequest>,
) -> Result<Json<CommandResponse<u32>>, ApiError> {
    let command = commands::RemoveItem {
        correlation_id: Uuid::new_v4(),
        inventory_id: request.inventory_id,
        item_key: request.item_key,
        quantity: request.quantity,
    };

    info!(correlation_id = %command.correlation_id, "handling remove_item command");

    let result = command_handlers::handle_remove_item(
        &command,
        state.clock.as_ref(),
        &*state.event_repository,
        &state.observers,
    )
    .await?;

    Ok(Json(result.into()))
}

/// POST /remove-slot
#[instrument(skip(state, request), fields(inventory_id = %request.inventory_id, slot = request.slot))]
async fn remove_slot(
    State(state): State<AppState>,
    Json(request): Json<SlotRequest>,
) -> Result<Json<CommandResponse<SlotRecord>>, ApiError> {
    let command = commands::RemoveSlot {
        correlation_id: Uuid::new_v4(),
        inventory_id: request.inventory_id,
        slot: request.slot,
    };

    info!(correlation_id = %command.correlation_id, "handling remove_slot command");

    let result = command_handlers::handle_remove_slot(
        &command,
        state.clock.as_ref(),
        &*state.event_repository,
        &state.observers,
    )
    .await?;

    let removed = result
        .outcome
        .as_ref()
        .map_or_else(SlotRecord::empty, |stack| {
            SlotRecord::holding(stack.key(), stack.quantity)
        });
    Ok(Json(CommandResponse {
        aggregate_id: result.aggregate_id,
        event_ids: result.stored_events.iter().map(|e| e.event_id).collect(),
        outcome: removed,
    }))
}

/// POST /drop-item
#[instrument(skip(state, request), fields(inventory_id = %request.inventory_id, slot = request.slot))]
async fn drop_item(
    State(state): State<AppState>,
    Json(request): Json<DropItemRequest>,
) -> Result<Json<CommandResponse<DroppedItem>>, ApiError> {
    let command = commands::DropItem {
        correlation_id: Uuid::new_v4(),
        inventory_id: request.inventory_id,
        slot: request.slot,
        quantity: request.quantity.unwrap_or(u32::MAX),
    };

    info!(correlation_id = %command.correlation_id, "handling drop_item command");

    let result = command_handlers::handle_drop_item(
        &command,
        state.clock.as_ref(),
        &*state.event_repository,
        &state.observers,
    )
    .await?;

    Ok(Json(result.into()))
}

/// POST /swap
#[instrument(skip(state, request), fields(inventory_id = %request.inventory_id))]
async fn swap_slots(
    State(state): State<AppState>,
    Json(request): Json<SwapRequest>,
) -> Result<Json<CommandResponse<()>>, ApiError> {
    let command = commands::SwapSlots {
        correlation_id: Uuid::new_v4(),
        inventory_id: request.inventory_id,
        from_slot: request.from_slot,
        to_slot: request.to_slot,
    };

    info!(correlation_id = %command.correlation_id, "handling swap_slots command");

    let result = command_handlers::handle_swap_slots(
        &command,
        state.clock.as_ref(),
        &*state.event_repository,
        &state.observers,
    )
    .await?;

    Ok(Json(result.into()))
}

/// POST /combine
#[instrument(skip(state, request), fields(inventory_id = %request.inventory_id))]
async fn combine_stacks(
    State(state): State<AppState>,
    Json(request): Json<CombineRequest>,
) -> Result<Json<CommandResponse<u32>>, ApiError> {
    let command = commands::CombineStacks {
        correlation_id: Uuid::new_v4(),
        inventory_id: request.inventory_id,
        source_slot: request.source_slot,
        target_slot: request.target_slot,
    };

    info!(correlation_id = %command.correlation_id, "handling combine_stacks command");

    let result = command_handlers::handle_combine_stacks(
        &command,
        state.clock.as_ref(),
        &*state.event_repository,
        &state.observers,
    )
    .await?;

    Ok(Json(result.into()))
}

/// POST /split
#[instrument(skip(state, request), fields(inventory_id = %request.inventory_id))]
async fn split_stack(
    State(state): State<AppState>,
    Json(request): Json<SplitRequest>,
) -> Result<Json<CommandResponse<usize>>, ApiError> {
    let command = commands::SplitStack {
        correlation_id: Uuid::new_v4(),
        inventory_id: request.inventory_id,
        source_slot: request.source_slot,
        quantity: request.quantity,
    };

    info!(correlation_id = %command.correlation_id, "handling split_stack command");

    let result = command_handlers::handle_split_stack(
        &command,
        state.clock.as_ref(),
        &*state.event_repository,
        &state.observers,
    )
    .await?;

    Ok(Json(result.into()))
}

/// POST /use-item
#[instrument(skip(state, request), fields(inventory_id = %request.inventory_id, slot = request.slot))]
async fn use_item(
    State(state): State<AppState>,
    Json(request): Json<SlotRequest>,
) -> Result<Json<CommandResponse<ItemUsed>>, ApiError> {
    let command = commands::UseItem {
        correlation_id: Uuid::new_v4(),
        inventory_id: request.inventory_id,
        slot: request.slot,
    };

    info!(correlation_id = %command.correlation_id, "handling use_item command");

    let result = command_handlers::handle_use_item(
        &command,
        state.clock.as_ref(),
        &*state.event_repository,
        &state.observers,
    )
    .await?;

    Ok(Json(result.into()))
}

/// GET /{inventory_id}
#[instrument(skip(state))]
async fn get_inventory(
    State(state): State<AppState>,
    Path(inventory_id): Path<Uuid>,
) -> Result<Json<InventoryView>, ApiError> {
    let view = query_handlers::get_inventory_by_id(inventory_id, &*state.event_repository).await?;
    Ok(Json(view))
}

/// GET /{inventory_id}/snapshot
#[instrument(skip(state))]
async fn get_snapshot(
    State(state): State<AppState>,
    Path(inventory_id): Path<Uuid>,
) -> Result<Json<InventorySnapshotView>, ApiError> {
    let view =
        query_handlers::get_inventory_snapshot(inventory_id, &*state.event_repository).await?;
    Ok(Json(view))
}

/// GET /{inventory_id}/items/{item_key}/count
#[instrument(skip(state))]
async fn get_item_count(
    State(state): State<AppState>,
    Path((inventory_id, item_key)): Path<(Uuid, String)>,
) -> Result<Json<ItemCountView>, ApiError> {
    let view =
        query_handlers::get_item_count(inventory_id, &item_key, &*state.event_repository).await?;
    Ok(Json(view))
}

/// Returns the router for the inventory context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_inventory))
        .route("/add-item", post(add_item))
        .route("/remove-item", post(remove_item))
        .route("/remove-slot", post(remove_slot))
        .route("/drop-item", post(drop_item))
        .route("/swap", post(swap_slots))
        .route("/combine", post(combine_stacks))
        .route("/split", post(split_stack))
        .route("/use-item", post(use_item))
        .route("/{inventory_id}", get(get_inventory))
        .route("/{inventory_id}/snapshot", get(get_snapshot))
        .route("/{inventory_id}/items/{item_key}/count", get(get_item_count))
}
