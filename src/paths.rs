//! Endpoint paths exposed by the storefront backend.
//!
//! Paths are relative to the configured base URL. The HTTP client layer
//! matches against the auth paths to drive credential persistence, so they
//! live here rather than in the individual API modules.

/// Sign-in endpoint. A successful response carries an auth envelope.
pub const LOGIN: &str = "login";

/// Account creation endpoint. A successful response carries an auth envelope.
pub const REGISTER: &str = "register";

/// Sign-out endpoint. A successful response clears stored auth state.
pub const LOGOUT: &str = "logout";

/// Cart/purchase listing endpoint (filtered by `status` query parameter).
pub const PURCHASES: &str = "purchases";

/// Adds a product to the cart.
pub const ADD_TO_CART: &str = "purchases/add-to-cart";

/// Updates the quantity of a cart line.
pub const UPDATE_PURCHASE: &str = "purchases/update-purchase";

/// Submits checked cart lines for purchase.
pub const BUY_PRODUCTS: &str = "purchases/buy-products";

/// Product catalog listing and detail endpoint root.
pub const PRODUCTS: &str = "products";

/// Category listing endpoint.
pub const CATEGORIES: &str = "categories";

/// Current user profile endpoint.
pub const ME: &str = "me";

/// Profile update endpoint (also used for password changes).
pub const USER: &str = "user";
