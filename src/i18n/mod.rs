// SPDX-License-Identifier: MPL-2.0
//! String lookup for localizable subscribers.
//!
//! The localizer itself never formats text. Subscribers call a
//! [`StringLookup`] from their refresh callback; [`FluentCatalog`] is a
//! ready-made lookup over Fluent (`.ftl`) sources whose active language is
//! switched from the localizer's on-change hook.

pub mod fluent;
pub mod lookup;

pub use fluent::FluentCatalog;
pub use lookup::StringLookup;
