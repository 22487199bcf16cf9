pub use super::crypto_prices::Entity as CryptoPrices;
