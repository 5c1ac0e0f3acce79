//! Database models
//!
//! Serde models for every table plus the Create/Update payload types used
//! by the repositories. Record references are stored as `table:key`
//! strings (see `serde_helpers`).

pub mod serde_helpers;

pub mod caterer;
pub mod category;
pub mod contact;
pub mod customer;
pub mod event;
pub mod feedback;
pub mod menu_item;
pub mod order;
pub mod password_reset_otp;

pub use caterer::{
    Caterer, CatererCreate, CatererProfile, CatererUpdate, DiscountTier, PricingConfigUpdate,
};
pub use category::{Category, CategoryCreate, CategoryUpdate};
pub use contact::{Contact, ContactCreate};
pub use customer::Customer;
pub use event::{Event, EventCreate, EventUpdate};
pub use feedback::{Feedback, FeedbackCreate};
pub use menu_item::{Dietary, MenuItem, MenuItemCreate, MenuItemUpdate};
pub use order::{
    CustomerInfo, EventDetails, Order, OrderItem, OrderPricing, OrderStatus, TimelineEntry,
};
pub use password_reset_otp::PasswordResetOtp;
