/// Returns the cache key for a rate table with the given base currency.
pub fn rates_key(base: &str) -> String {
    format!("rates:{}", base.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates_key_is_uppercased() {
        assert_eq!(rates_key("eur"), "rates:EUR");
        assert_eq!(rates_key("USD"), "rates:USD");
    }
}
