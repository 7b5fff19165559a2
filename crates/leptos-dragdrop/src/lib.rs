//! Leptos DragDrop Utilities
//!
//! Vertical drag-to-reorder for Leptos using pointer events, so mouse and
//! touch drags behave the same. Uses a movement threshold to distinguish
//! click from drag.
//!
//! Touch pointers stay captured by the element the touch started on, so the
//! hovered row is found with `elementFromPoint` instead of enter/leave
//! events. Rows mark themselves with `data-dnd-index`, gaps between rows
//! with `data-dnd-slot`.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// Attribute carrying a row's index
pub const ROW_INDEX_ATTR: &str = "data-dnd-index";

/// Attribute carrying a drop zone's slot
pub const SLOT_ATTR: &str = "data-dnd-slot";

/// How long the "drag just ended" flag stays set, so the trailing click is ignored
const DRAG_END_GRACE_MS: i32 = 100;

/// A row being dragged: its id and its index when the drag started
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSource {
    pub id: u64,
    pub index: usize,
}

/// What lies under the pointer during a drag
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DropHit {
    /// A row, with its vertical extent in client coordinates
    Row { index: usize, top: f64, height: f64 },
    /// A drop zone between rows
    Slot(usize),
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_read: ReadSignal<Option<DragSource>>,
    pub dragging_write: WriteSignal<Option<DragSource>>,
    /// Gap the row would be dropped into (0 = before the first row)
    pub drop_slot_read: ReadSignal<Option<usize>>,
    pub drop_slot_write: WriteSignal<Option<usize>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending row (pointerdown but not yet dragging)
    pub pending_read: ReadSignal<Option<DragSource>>,
    pub pending_write: WriteSignal<Option<DragSource>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

impl DndSignals {
    /// Id of the row currently being dragged
    pub fn dragging_id(&self) -> Option<u64> {
        self.dragging_read.get().map(|s| s.id)
    }

    /// True while a drag is in progress (untracked)
    pub fn is_dragging_untracked(&self) -> bool {
        self.dragging_read.get_untracked().is_some()
    }

    /// True while a drag is in progress or just finished (untracked)
    pub fn suppress_click_untracked(&self) -> bool {
        self.is_dragging_untracked() || self.drag_just_ended_read.get_untracked()
    }
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<DragSource>);
    let (drop_slot_read, drop_slot_write) = signal(None::<usize>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<DragSource>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_slot_read,
        drop_slot_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// Translate a drop slot into the destination index for an array move.
///
/// Slot `s` is the gap before row `s`; slot `len` is after the last row.
/// Returns `None` when the drop would leave the row where it is.
pub fn slot_to_index(from: usize, slot: usize) -> Option<usize> {
    let to = if slot > from { slot - 1 } else { slot };
    (to != from).then_some(to)
}

/// Slot for a pointer at `pointer_y` over a row: the upper half drops
/// before the row, the lower half after it.
pub fn row_slot(index: usize, pointer_y: f64, top: f64, height: f64) -> usize {
    if pointer_y < top + height / 2.0 {
        index
    } else {
        index + 1
    }
}

/// Slot under the pointer for whatever was hit
pub fn hit_slot(hit: DropHit, pointer_y: f64) -> usize {
    match hit {
        DropHit::Row { index, top, height } => row_slot(index, pointer_y, top, height),
        DropHit::Slot(slot) => slot,
    }
}

/// Find the row or drop zone under a client-space point
fn hit_at(x: i32, y: i32) -> Option<DropHit> {
    let doc = web_sys::window()?.document()?;
    let el = doc.element_from_point(x as f32, y as f32)?;
    let selector = format!("[{}],[{}]", ROW_INDEX_ATTR, SLOT_ATTR);
    let target = el.closest(&selector).ok()??;

    if let Some(slot) = target.get_attribute(SLOT_ATTR) {
        return slot.parse().ok().map(DropHit::Slot);
    }
    let index = target.get_attribute(ROW_INDEX_ATTR)?.parse().ok()?;
    let rect = target.get_bounding_client_rect();
    Some(DropHit::Row { index, top: rect.top(), height: rect.height() })
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.set(None);
    dnd.drop_slot_write.set(None);
    dnd.pending_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            DRAG_END_GRACE_MS,
        );
        cb.forget();
    }
}

/// Create pointerdown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_pointerdown(
    dnd: DndSignals,
    id: u64,
    index: usize,
    disabled: Signal<bool>,
) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        if !ev.is_primary() || ev.button() != 0 || disabled.get_untracked() {
            return;
        }
        // Ignore if target is input or button
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        dnd.pending_write.set(Some(DragSource { id, index }));
        dnd.start_x_write.set(ev.client_x());
        dnd.start_y_write.set(ev.client_y());
    }
}

/// Bind document pointermove - starts drag if moved enough, then tracks
/// the slot under the pointer
fn bind_global_pointermove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_pointermove = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(move |ev: web_sys::PointerEvent| {
        if !ev.is_primary() { return; }

        if let Some(source) = dnd.dragging_read.get_untracked() {
            ev.prevent_default();
            let slot = hit_at(ev.client_x(), ev.client_y())
                .map(|hit| hit_slot(hit, f64::from(ev.client_y())))
                .filter(|&slot| slot_to_index(source.index, slot).is_some());
            if dnd.drop_slot_read.get_untracked() != slot {
                dnd.drop_slot_write.set(slot);
            }
            return;
        }

        if let Some(pending) = dnd.pending_read.get_untracked() {
            let dx = (ev.client_x() - dnd.start_x_read.get_untracked()).abs();
            let dy = (ev.client_y() - dnd.start_y_read.get_untracked()).abs();

            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.dragging_write.set(Some(pending));
            }
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("pointermove", on_pointermove.as_ref().unchecked_ref());
    }
    on_pointermove.forget();
}

/// Bind global pointerup/pointercancel handlers for drop detection.
///
/// `on_drop(from, to)` receives array-move indexes and only fires when the
/// drop actually changes the row's position. A cancelled pointer never drops.
pub fn bind_global_pointerup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(usize, usize) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_pointerup = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(move |ev: web_sys::PointerEvent| {
        if !ev.is_primary() { return; }
        let dragging = dnd.dragging_read.get_untracked();
        let slot = dnd.drop_slot_read.get_untracked();

        dnd.pending_write.set(None);

        let Some(source) = dragging else {
            // Plain click: the click event fires naturally on the element
            return;
        };
        end_drag(&dnd);
        if ev.type_() == "pointercancel" {
            log::debug!("[DND] drag of id={} cancelled", source.id);
            return;
        }
        match slot.and_then(|slot| slot_to_index(source.index, slot)) {
            Some(to) => {
                log::debug!("[DND] drop id={} from={} to={}", source.id, source.index, to);
                on_drop(source.index, to);
            }
            None => log::debug!("[DND] drop id={} left in place", source.id),
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        for event in ["pointerup", "pointercancel"] {
            let _ = doc.add_event_listener_with_callback(event, on_pointerup.as_ref().unchecked_ref());
        }
    }
    on_pointerup.forget();

    bind_global_pointermove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_to_index_moving_down() {
        // Row 0 dropped into the gap before row 3 lands at index 2
        assert_eq!(slot_to_index(0, 3), Some(2));
        // Dropped after the last of four rows
        assert_eq!(slot_to_index(0, 4), Some(3));
    }

    #[test]
    fn test_slot_to_index_moving_up() {
        assert_eq!(slot_to_index(3, 0), Some(0));
        assert_eq!(slot_to_index(3, 1), Some(1));
    }

    #[test]
    fn test_slot_to_index_adjacent_gaps_are_noops() {
        assert_eq!(slot_to_index(2, 2), None);
        assert_eq!(slot_to_index(2, 3), None);
    }

    #[test]
    fn test_row_slot_halves() {
        // Row 3 spans y = 300..340
        assert_eq!(row_slot(3, 300.0, 300.0, 40.0), 3);
        assert_eq!(row_slot(3, 319.9, 300.0, 40.0), 3);
        assert_eq!(row_slot(3, 320.0, 300.0, 40.0), 4);
        assert_eq!(row_slot(3, 339.0, 300.0, 40.0), 4);
    }

    #[test]
    fn test_hit_slot_to_move() {
        // Dragging row 1 to the lower half of row 3 places it after row 3
        let lower = hit_slot(DropHit::Row { index: 3, top: 300.0, height: 40.0 }, 335.0);
        assert_eq!(slot_to_index(1, lower), Some(3));
        // Dragging row 3 to the upper half of row 1 places it before row 1
        let upper = hit_slot(DropHit::Row { index: 1, top: 100.0, height: 40.0 }, 105.0);
        assert_eq!(slot_to_index(3, upper), Some(1));
        // Drop zones map straight to their slot
        assert_eq!(hit_slot(DropHit::Slot(0), 999.0), 0);
    }

    #[test]
    fn test_hit_on_own_row_stays_in_place() {
        let own = DropHit::Row { index: 2, top: 200.0, height: 40.0 };
        assert_eq!(slot_to_index(2, hit_slot(own, 205.0)), None);
        assert_eq!(slot_to_index(2, hit_slot(own, 235.0)), None);
    }
}
