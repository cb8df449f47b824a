/// Grocery list state
///
/// Items can be checked off, have their quantity adjusted and be removed by
/// dragging them to the left.

use super::data::{initial_grocery_items, GroceryItem};

/// Furthest a row can be dragged to the left, in pixels
pub const MAX_DRAG: f32 = -80.0;

/// Releasing a drag beyond this offset removes the row
pub const DELETE_THRESHOLD: f32 = -60.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    Toggled(u32),
    QuantityChanged(u32, i32),
    Removed(u32),
    /// Horizontal drag released at the given offset
    DragReleased(u32, f32),
}

#[derive(Debug)]
pub struct GroceryList {
    items: Vec<GroceryItem>,
}

impl Default for GroceryList {
    fn default() -> Self {
        Self::new(initial_grocery_items())
    }
}

impl GroceryList {
    pub fn new(items: Vec<GroceryItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[GroceryItem] {
        &self.items
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Toggled(id) => {
                if let Some(item) = self.item_mut(id) {
                    item.checked = !item.checked;
                }
            }
            Message::QuantityChanged(id, delta) => {
                if let Some(item) = self.item_mut(id) {
                    let quantity = i64::from(item.quantity) + i64::from(delta);
                    item.quantity = quantity.clamp(1, i64::from(u32::MAX)) as u32;
                }
            }
            Message::Removed(id) => self.remove(id),
            Message::DragReleased(id, offset) => {
                if should_delete(offset) {
                    self.remove(id);
                }
            }
        }
    }

    /// Sum of price times quantity over every item
    pub fn total_price(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.price * f64::from(item.quantity))
            .sum()
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|item| item.checked).count()
    }

    fn item_mut(&mut self, id: u32) -> Option<&mut GroceryItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    fn remove(&mut self, id: u32) {
        self.items.retain(|item| item.id != id);
    }
}

/// Limit a raw horizontal drag to the allowed range
pub fn clamp_drag(offset: f32) -> f32 {
    offset.clamp(MAX_DRAG, 0.0)
}

pub fn should_delete(offset: f32) -> bool {
    offset < DELETE_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_totals() {
        let list = GroceryList::default();
        assert_eq!(list.items().len(), 8);
        assert_eq!(list.checked_count(), 0);
        assert!((list.total_price() - 45.96).abs() < 1e-9);
    }

    #[test]
    fn test_quantity_never_below_one() {
        let mut list = GroceryList::default();
        list.update(Message::QuantityChanged(1, -1));
        assert_eq!(list.items()[0].quantity, 1);

        list.update(Message::QuantityChanged(1, 2));
        assert_eq!(list.items()[0].quantity, 3);
        assert!((list.total_price() - (45.96 + 2.0 * 3.99)).abs() < 1e-9);

        list.update(Message::QuantityChanged(1, -10));
        assert_eq!(list.items()[0].quantity, 1);
    }

    #[test]
    fn test_toggle_and_remove() {
        let mut list = GroceryList::default();
        list.update(Message::Toggled(2));
        list.update(Message::Toggled(3));
        assert_eq!(list.checked_count(), 2);

        list.update(Message::Removed(2));
        assert_eq!(list.checked_count(), 1);
        assert_eq!(list.items().len(), 7);

        // Unknown ids are ignored
        list.update(Message::Toggled(99));
        list.update(Message::Removed(99));
        assert_eq!(list.items().len(), 7);
    }

    #[test]
    fn test_drag_to_delete() {
        let mut list = GroceryList::default();
        list.update(Message::DragReleased(5, -40.0));
        assert_eq!(list.items().len(), 8);

        list.update(Message::DragReleased(5, -60.0));
        assert_eq!(list.items().len(), 8);

        list.update(Message::DragReleased(5, -61.0));
        assert_eq!(list.items().len(), 7);
        assert!(list.items().iter().all(|item| item.id != 5));
    }

    #[test]
    fn test_clamp_drag() {
        assert_eq!(clamp_drag(-200.0), MAX_DRAG);
        assert_eq!(clamp_drag(30.0), 0.0);
        assert_eq!(clamp_drag(-20.0), -20.0);
    }
}
