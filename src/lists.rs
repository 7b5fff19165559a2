//! List Collection Operations
//!
//! Pure transformations over the list collection. Every operation takes the
//! current collection by reference and returns a new one; callers persist
//! the result.

use crate::models::{Item, ShoppingList};

/// Pick an id for a new entity: `now`, bumped past every existing id so two
/// creations in the same millisecond never collide. When `u64::MAX` is
/// already taken the lowest unused id is used instead.
pub fn next_id(existing: impl IntoIterator<Item = u64>, now: u64) -> u64 {
    let mut ids: Vec<u64> = existing.into_iter().collect();
    match ids.iter().copied().max() {
        Some(max) if max >= now => max.checked_add(1).unwrap_or_else(|| {
            ids.sort_unstable();
            ids.dedup();
            // ids is sorted and unique, so the first gap is where id != position
            ids.iter()
                .zip(0u64..)
                .find(|(id, expected)| **id != *expected)
                .map_or(ids.len() as u64, |(_, expected)| expected)
        }),
        _ => now,
    }
}

/// Trim an edited name; `None` when nothing is left.
pub fn clean_name(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Clone the collection and apply `f` to the list with `list_id`.
fn map_list<F>(lists: &[ShoppingList], list_id: u64, f: F) -> Vec<ShoppingList>
where
    F: FnOnce(&mut ShoppingList),
{
    let mut next = lists.to_vec();
    if let Some(list) = next.iter_mut().find(|list| list.id == list_id) {
        f(list);
    }
    next
}

/// Clone the collection and apply `f` to one item of one list.
fn map_item<F>(lists: &[ShoppingList], list_id: u64, item_id: u64, f: F) -> Vec<ShoppingList>
where
    F: FnOnce(&mut Item),
{
    map_list(lists, list_id, |list| {
        if let Some(item) = list.items.iter_mut().find(|item| item.id == item_id) {
            f(item);
        }
    })
}

// ========================
// List operations
// ========================

/// Append a new list named `List N`. Returns the collection and the new id.
pub fn add_list(lists: &[ShoppingList], now: u64) -> (Vec<ShoppingList>, u64) {
    let id = next_id(lists.iter().map(|list| list.id), now);
    let mut next = lists.to_vec();
    next.push(ShoppingList::new(id, format!("List {}", lists.len() + 1)));
    (next, id)
}

/// Rename a list. Empty (after trimming) or unchanged names are ignored.
pub fn rename_list(lists: &[ShoppingList], list_id: u64, name: &str) -> Vec<ShoppingList> {
    let Some(name) = clean_name(name) else {
        return lists.to_vec();
    };
    map_list(lists, list_id, |list| {
        if list.name != name {
            list.name = name.to_string();
        }
    })
}

/// Remove a list and work out which list is active afterwards.
///
/// Deleting the active list falls back to the first remaining list (or none).
pub fn delete_list(
    lists: &[ShoppingList],
    list_id: u64,
    active: Option<u64>,
) -> (Vec<ShoppingList>, Option<u64>) {
    let next: Vec<ShoppingList> = lists.iter().filter(|list| list.id != list_id).cloned().collect();
    let active = if active == Some(list_id) {
        next.first().map(|list| list.id)
    } else {
        active
    };
    (next, active)
}

/// The list that should be displayed: `active` if it still exists,
/// otherwise the first list.
pub fn resolve_active(lists: &[ShoppingList], active: Option<u64>) -> Option<u64> {
    match active {
        Some(id) if lists.iter().any(|list| list.id == id) => Some(id),
        _ => lists.first().map(|list| list.id),
    }
}

pub fn find_list(lists: &[ShoppingList], list_id: u64) -> Option<&ShoppingList> {
    lists.iter().find(|list| list.id == list_id)
}

// ========================
// Item operations
// ========================

/// Append an item named `Item N` to a list. Returns the collection and the
/// new id, or `None` if the list does not exist.
pub fn add_item(lists: &[ShoppingList], list_id: u64, now: u64) -> (Vec<ShoppingList>, Option<u64>) {
    let Some(list) = find_list(lists, list_id) else {
        return (lists.to_vec(), None);
    };
    let id = next_id(list.items.iter().map(|item| item.id), now);
    let next = map_list(lists, list_id, |list| {
        let name = format!("Item {}", list.items.len() + 1);
        list.items.push(Item::new(id, name));
    });
    (next, Some(id))
}

/// Rename an item, storing the trimmed name. Empty input is discarded.
pub fn rename_item(lists: &[ShoppingList], list_id: u64, item_id: u64, name: &str) -> Vec<ShoppingList> {
    let Some(name) = clean_name(name) else {
        return lists.to_vec();
    };
    map_item(lists, list_id, item_id, |item| item.name = name.to_string())
}

/// Flip an item's completed flag
pub fn toggle_item(lists: &[ShoppingList], list_id: u64, item_id: u64) -> Vec<ShoppingList> {
    map_item(lists, list_id, item_id, |item| item.completed = !item.completed)
}

pub fn delete_item(lists: &[ShoppingList], list_id: u64, item_id: u64) -> Vec<ShoppingList> {
    map_list(lists, list_id, |list| list.items.retain(|item| item.id != item_id))
}

/// Array move: take the item at `from` and insert it at `to`.
/// Out-of-range indexes leave the list unchanged.
pub fn move_item(lists: &[ShoppingList], list_id: u64, from: usize, to: usize) -> Vec<ShoppingList> {
    map_list(lists, list_id, |list| {
        let len = list.items.len();
        if from < len && to < len && from != to {
            let item = list.items.remove(from);
            list.items.insert(to, item);
        }
    })
}

/// Move an item one or more slots up (negative) or down (positive),
/// clamped to the list bounds.
pub fn shift_item(lists: &[ShoppingList], list_id: u64, item_id: u64, offset: isize) -> Vec<ShoppingList> {
    let Some(list) = find_list(lists, list_id) else {
        return lists.to_vec();
    };
    let Some(from) = list.position_of(item_id) else {
        return lists.to_vec();
    };
    let last = list.items.len().saturating_sub(1) as isize;
    let to = (from as isize + offset).clamp(0, last) as usize;
    move_item(lists, list_id, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_list(id: u64, item_ids: &[u64]) -> ShoppingList {
        let mut list = ShoppingList::new(id, format!("List {}", id));
        list.items = item_ids
            .iter()
            .map(|&item_id| Item::new(item_id, format!("Item {}", item_id)))
            .collect();
        list
    }

    fn item_ids(lists: &[ShoppingList], list_id: u64) -> Vec<u64> {
        find_list(lists, list_id).unwrap().items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_next_id_uses_now_when_free() {
        assert_eq!(next_id([1, 2, 3], 100), 100);
        assert_eq!(next_id(std::iter::empty(), 100), 100);
    }

    #[test]
    fn test_next_id_same_millisecond() {
        assert_eq!(next_id([100], 100), 101);
        assert_eq!(next_id([100, 101], 100), 102);
    }

    #[test]
    fn test_next_id_at_u64_max_reuses_free_id() {
        assert_eq!(next_id([u64::MAX], 100), 0);
        assert_eq!(next_id([0, 1, u64::MAX], 100), 2);
        assert_eq!(next_id([0, 2, u64::MAX, u64::MAX], 5), 1);
    }

    #[test]
    fn test_add_item_after_max_id_stays_unique() {
        let lists = vec![make_list(1, &[u64::MAX])];
        let (next, id) = add_item(&lists, 1, 100);
        assert_eq!(id, Some(0));
        assert_eq!(item_ids(&next, 1), vec![u64::MAX, 0]);
    }

    #[test]
    fn test_add_list_names_and_ids() {
        let (lists, first) = add_list(&[], 1000);
        let (lists, second) = add_list(&lists, 1000);

        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].name, "List 1");
        assert_eq!(lists[1].name, "List 2");
        assert_eq!(first, 1000);
        assert_ne!(first, second);
        assert!(lists[1].items.is_empty());
    }

    #[test]
    fn test_add_list_does_not_touch_input() {
        let original = vec![make_list(1, &[10])];
        let (next, _) = add_list(&original, 5);
        assert_eq!(original.len(), 1);
        assert_eq!(next.len(), 2);
    }

    #[test]
    fn test_rename_list_trims() {
        let lists = vec![make_list(1, &[])];
        let renamed = rename_list(&lists, 1, "  Hardware  ");
        assert_eq!(renamed[0].name, "Hardware");
    }

    #[test]
    fn test_rename_list_empty_is_noop() {
        let lists = vec![make_list(1, &[10])];
        assert_eq!(rename_list(&lists, 1, ""), lists);
        assert_eq!(rename_list(&lists, 1, "   "), lists);
    }

    #[test]
    fn test_delete_active_list_falls_back_to_first() {
        let lists = vec![make_list(1, &[]), make_list(2, &[]), make_list(3, &[])];

        let (next, active) = delete_list(&lists, 2, Some(2));
        assert_eq!(next.len(), 2);
        assert_eq!(active, Some(1));

        let (next, active) = delete_list(&lists, 1, Some(1));
        assert_eq!(next[0].id, 2);
        assert_eq!(active, Some(2));
    }

    #[test]
    fn test_delete_last_list_clears_active() {
        let lists = vec![make_list(1, &[])];
        let (next, active) = delete_list(&lists, 1, Some(1));
        assert!(next.is_empty());
        assert_eq!(active, None);
    }

    #[test]
    fn test_delete_inactive_list_keeps_active() {
        let lists = vec![make_list(1, &[]), make_list(2, &[])];
        let (_, active) = delete_list(&lists, 1, Some(2));
        assert_eq!(active, Some(2));
    }

    #[test]
    fn test_resolve_active() {
        let lists = vec![make_list(1, &[]), make_list(2, &[])];
        assert_eq!(resolve_active(&lists, Some(2)), Some(2));
        assert_eq!(resolve_active(&lists, Some(9)), Some(1));
        assert_eq!(resolve_active(&lists, None), Some(1));
        assert_eq!(resolve_active(&[], Some(1)), None);
    }

    #[test]
    fn test_add_item_appends_with_default_name() {
        let lists = vec![make_list(1, &[10]), make_list(2, &[])];
        let (next, id) = add_item(&lists, 1, 500);

        assert_eq!(id, Some(500));
        let list = find_list(&next, 1).unwrap();
        assert_eq!(list.items.len(), 2);
        assert_eq!(list.items[1].name, "Item 2");
        assert!(!list.items[1].completed);
        assert!(find_list(&next, 2).unwrap().items.is_empty());
    }

    #[test]
    fn test_add_item_unknown_list() {
        let lists = vec![make_list(1, &[])];
        let (next, id) = add_item(&lists, 7, 500);
        assert_eq!(id, None);
        assert_eq!(next, lists);
    }

    #[test]
    fn test_add_item_ids_unique_within_list() {
        let lists = vec![make_list(1, &[])];
        let (lists, a) = add_item(&lists, 1, 42);
        let (lists, b) = add_item(&lists, 1, 42);
        assert_ne!(a, b);
        assert_eq!(item_ids(&lists, 1), vec![42, 43]);
    }

    #[test]
    fn test_rename_item() {
        let lists = vec![make_list(1, &[10, 20])];
        let next = rename_item(&lists, 1, 20, " Bread ");
        assert_eq!(next[0].items[1].name, "Bread");
        assert_eq!(next[0].items[0].name, "Item 10");
    }

    #[test]
    fn test_rename_item_empty_is_noop() {
        let lists = vec![make_list(1, &[10])];
        assert_eq!(rename_item(&lists, 1, 10, "  "), lists);
    }

    #[test]
    fn test_toggle_item_twice_restores() {
        let lists = vec![make_list(1, &[10])];
        let once = toggle_item(&lists, 1, 10);
        assert!(once[0].items[0].completed);
        let twice = toggle_item(&once, 1, 10);
        assert_eq!(twice, lists);
    }

    #[test]
    fn test_delete_item() {
        let lists = vec![make_list(1, &[10, 20, 30])];
        let next = delete_item(&lists, 1, 20);
        assert_eq!(item_ids(&next, 1), vec![10, 30]);
    }

    #[test]
    fn test_move_item_is_permutation() {
        let mut lists = vec![make_list(1, &[10, 20, 30, 40])];
        lists[0].items[2].completed = true;

        let next = move_item(&lists, 1, 2, 0);
        assert_eq!(item_ids(&next, 1), vec![30, 10, 20, 40]);
        // Completion travels with the item
        assert!(next[0].items[0].completed);

        let mut before = item_ids(&lists, 1);
        let mut after = item_ids(&next, 1);
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_move_item_down() {
        let lists = vec![make_list(1, &[10, 20, 30, 40])];
        let next = move_item(&lists, 1, 0, 3);
        assert_eq!(item_ids(&next, 1), vec![20, 30, 40, 10]);
    }

    #[test]
    fn test_move_item_out_of_range_is_noop() {
        let lists = vec![make_list(1, &[10, 20])];
        assert_eq!(move_item(&lists, 1, 0, 5), lists);
        assert_eq!(move_item(&lists, 1, 5, 0), lists);
    }

    #[test]
    fn test_shift_item_clamps() {
        let lists = vec![make_list(1, &[10, 20, 30])];
        assert_eq!(item_ids(&shift_item(&lists, 1, 20, -1), 1), vec![20, 10, 30]);
        assert_eq!(item_ids(&shift_item(&lists, 1, 30, 1), 1), vec![10, 20, 30]);
        assert_eq!(item_ids(&shift_item(&lists, 1, 10, -1), 1), vec![10, 20, 30]);
    }
}
