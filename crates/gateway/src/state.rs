//! State

use std::sync::Arc;

use crate::upstream::Upstream;

pub(crate) struct State {
    pub(crate) products: Arc<dyn Upstream>,
    pub(crate) orders: Arc<dyn Upstream>,
}

impl State {
    #[must_use]
    pub(crate) fn new(products: Arc<dyn Upstream>, orders: Arc<dyn Upstream>) -> Arc<Self> {
        Arc::new(Self { products, orders })
    }
}
