pub mod asset_client;
pub mod catalog_client;

pub use asset_client::AssetClient;
pub use catalog_client::CatalogClient;
