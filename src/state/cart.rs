#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use crate::net::types::RecipeSummary;

/// Which branch the shopping list page renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CartView {
    /// First fetch still in flight; nothing known yet.
    Loading,
    Empty,
    Items,
}

/// Shopping cart contents and the app-wide counter shown in the header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CartState {
    pub items: Vec<RecipeSummary>,
    pub orders: usize,
    pub loading: bool,
}

impl CartState {
    /// Replace the list with a fresh fetch and sync the counter to it.
    pub fn load(&mut self, items: Vec<RecipeSummary>) {
        self.orders = items.len();
        self.items = items;
        self.loading = false;
    }

    /// A recipe was added from a list page.
    pub fn added(&mut self) {
        self.orders += 1;
    }

    /// A recipe left the cart. Unknown ids only move the counter.
    pub fn removed(&mut self, recipe_id: i64) {
        self.items.retain(|r| r.id != recipe_id);
        self.orders = self.orders.saturating_sub(1);
    }

    /// The download button is offered only when something is in the cart.
    pub fn can_download(&self) -> bool {
        self.orders > 0
    }

    /// A refresh keeps showing the rows already loaded.
    pub fn view(&self) -> CartView {
        if self.can_download() {
            CartView::Items
        } else if self.loading {
            CartView::Loading
        } else {
            CartView::Empty
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
