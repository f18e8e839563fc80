//! Analytics event contract and emitter for the Shopeze storefront.
//!
//! Every state transition and qualifying interaction in the storefront
//! is mirrored into a normalized event pushed onto a shared, append-only
//! queue. Six event shapes exist (`pageLoaded`, `linkClicked`,
//! `addToCart`, `removeFromCart`, `beginCheckout`, `purchase`) and the
//! serialized form uses the XDM data layer field names throughout.
//!
//! `linkClicked` events are additionally logged to a durable, bounded
//! click log (oldest evicted past 50 entries). The queue itself lives
//! only for the page view.

mod click_log;
mod emitter;
mod event;
mod queue;

pub use click_log::{ClickLog, ClickRecord, CLICK_LOG_CAP};
pub use emitter::AnalyticsEmitter;
pub use event::{
    ActionDetails, AnalyticsEvent, CartCommerce, CartEventProduct, CartTotals, CustomerContext,
    LinkType, ListedProduct, PageCommerce, PageLoadPayload, ProductCommerce, PurchaseCommerce,
    PurchaseOrder, PurchasedProduct, ViewedProduct, WebInteraction, WebPageDetails,
    DEFAULT_CATEGORY, SITE_NAME,
};
pub use queue::EventQueue;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        AnalyticsEmitter, AnalyticsEvent, ClickLog, ClickRecord, CustomerContext, EventQueue,
        LinkType, PageCommerce,
    };
}
