//! Currency-zone trigger and currency reference lookups.
//!
//! Fires when the country implied by the current city differs from the
//! last recorded country. The recorded country itself is the suppression
//! mechanism: while it is unchanged nothing fires, and it is re-recorded on
//! every evaluation.

use log::{debug, info};

use crate::{
    notifications::{Category, NewNotification, Priority},
    reference::{cities, currencies, currencies::Currency},
    storage::Storage,
};

/// Storage key holding the last detected country code.
const LAST_COUNTRY_KEY: &str = "last_detected_country";

/// Exchange rate between the currencies of two cities.
pub struct ConversionRate {
    pub rate: f64,
    pub from_code: &'static str,
    pub to_code: &'static str,
}

/// Currency-zone crossing evaluator.
pub struct CurrencyTrigger {
    storage: Storage,
}

impl CurrencyTrigger {
    pub fn new(storage: Storage) -> Self {
        CurrencyTrigger { storage }
    }

    /// Evaluates a city context against the recorded country.
    ///
    /// Returns the currency-change alert when the implied country differs
    /// from the recorded one. The country is recorded on every evaluation,
    /// changed or not; an unmapped city key skips the evaluation entirely.
    pub async fn evaluate(&self, city_key: &str) -> Option<NewNotification> {
        let Some(city) = cities::city(city_key) else {
            debug!("no country mapping for city {}, skipping currency check", city_key);
            return None;
        };

        let last_country: Option<String> = self.storage.get(LAST_COUNTRY_KEY).await;
        let changed = matches!(&last_country, Some(last) if last != city.country);

        self.storage.set(LAST_COUNTRY_KEY, &city.country).await;

        if !changed {
            return None;
        }

        let currency = currencies::for_country(city.country)?;
        info!(
            "currency zone change {} -> {}",
            last_country.as_deref().unwrap_or("?"),
            city.country
        );

        Some(currency_alert(currency))
    }
}

fn currency_alert(currency: &'static Currency) -> NewNotification {
    // No conversion example when entering the USD zone.
    let conversion_example = if currency.country == "US" {
        String::new()
    } else {
        format!(
            " (~{:.0} {} = 100 USD)",
            100.0 / currency.rate_to_usd,
            currency.code
        )
    };

    let top_tip = currency.tips.first().copied().unwrap_or_default();

    NewNotification::new(
        Category::Currency,
        format!("Currency Change: {}", currency.code),
        format!(
            "Welcome to {}! You're now using {} ({}){}. {}",
            currency.country_name, currency.name, currency.symbol, conversion_example, top_tip
        ),
    )
    .priority(Priority::Medium)
}

/// Currency profile of a city, if the city and its country are mapped.
pub fn currency_info(city_key: &str) -> Option<&'static Currency> {
    let city = cities::city(city_key)?;
    currencies::for_country(city.country)
}

/// Exchange rate between the currencies of two cities.
pub fn conversion_rate(from_city: &str, to_city: &str) -> Option<ConversionRate> {
    let from = currency_info(from_city)?;
    let to = currency_info(to_city)?;

    Some(ConversionRate {
        rate: from.rate_to_usd / to.rate_to_usd,
        from_code: from.code,
        to_code: to.code,
    })
}

/// Converts an amount from one city's currency to another's.
pub fn convert_amount(amount: f64, from_city: &str, to_city: &str) -> Option<f64> {
    conversion_rate(from_city, to_city).map(|conversion| amount * conversion.rate)
}

/// Formats an amount in a city's currency. Unmapped cities format as USD.
pub fn format_amount(amount: f64, city_key: &str) -> String {
    match currency_info(city_key) {
        Some(currency) => format!("{}{:.2} {}", currency.symbol, amount, currency.code),
        None => format!("${:.2}", amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_first_evaluation_records_without_firing() {
        let dir = tempdir().unwrap();
        let trigger = CurrencyTrigger::new(Storage::new(dir.path()));

        assert!(trigger.evaluate("kansasCity").await.is_none());

        let recorded: Option<String> = trigger.storage.get(LAST_COUNTRY_KEY).await;
        assert_eq!(recorded.unwrap(), "US");
    }

    #[tokio::test]
    async fn test_same_country_does_not_fire() {
        let dir = tempdir().unwrap();
        let trigger = CurrencyTrigger::new(Storage::new(dir.path()));

        trigger.evaluate("kansasCity").await;
        assert!(trigger.evaluate("dallas").await.is_none());
    }

    #[tokio::test]
    async fn test_country_change_fires_once() {
        let dir = tempdir().unwrap();
        let trigger = CurrencyTrigger::new(Storage::new(dir.path()));

        trigger.evaluate("kansasCity").await;

        let alert = trigger.evaluate("mexicoCity").await.unwrap();
        assert_eq!(alert.category, Category::Currency);
        assert_eq!(alert.title, "Currency Change: MXN");
        assert!(alert.body.contains("Mexican Peso"));
        assert!(alert.body.contains("MXN = 100 USD"));

        // Re-evaluating the same country is silent.
        assert!(trigger.evaluate("guadalajara").await.is_none());
    }

    #[tokio::test]
    async fn test_entering_usd_zone_has_no_conversion_example() {
        let dir = tempdir().unwrap();
        let trigger = CurrencyTrigger::new(Storage::new(dir.path()));

        trigger.evaluate("mexicoCity").await;

        let alert = trigger.evaluate("miami").await.unwrap();
        assert!(!alert.body.contains("= 100 USD"));
        assert!(alert.body.contains("US Dollar"));
    }

    #[tokio::test]
    async fn test_unmapped_city_is_skipped() {
        let dir = tempdir().unwrap();
        let trigger = CurrencyTrigger::new(Storage::new(dir.path()));

        trigger.evaluate("kansasCity").await;
        assert!(trigger.evaluate("atlantis").await.is_none());

        // The recorded country is untouched by the skipped evaluation.
        let recorded: Option<String> = trigger.storage.get(LAST_COUNTRY_KEY).await;
        assert_eq!(recorded.unwrap(), "US");
    }

    #[test]
    fn test_conversion_rate_between_cities() {
        let conversion = conversion_rate("kansasCity", "mexicoCity").unwrap();
        assert_eq!(conversion.from_code, "USD");
        assert_eq!(conversion.to_code, "MXN");
        assert!((conversion.rate - 1.0 / 0.058).abs() < 0.01);
    }

    #[test]
    fn test_convert_amount() {
        let converted = convert_amount(100.0, "kansasCity", "toronto").unwrap();
        assert!((converted - 100.0 / 0.74).abs() < 0.01);
    }

    #[test]
    fn test_format_amount_unknown_city_falls_back_to_usd() {
        assert_eq!(format_amount(12.5, "atlantis"), "$12.50");
    }

    #[test]
    fn test_format_amount_mapped_city() {
        assert_eq!(format_amount(12.5, "toronto"), "C$12.50 CAD");
    }
}
