// Request parameter commands
pub mod check;
pub mod params;

// Reconciliation
pub mod delta;

// Provider settings
pub mod provider;
