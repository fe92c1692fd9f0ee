// Terminal front end: fetches the listings once, then filters them locally.
use anyhow::Context;
use clap::Parser;
use residences::{
    db::dataset::Dataset,
    dtos::listingdtos::{PropertyCardDto, PropertyDetailDto},
    models::{
        filtermodel::{FilterUpdate, Patch, PriceRange},
        propertymodel::{PropertyStatus, PropertyType},
    },
    service::{
        error::ServiceError,
        listings_client::{load_into, ListingsClient},
        map_view::map_center,
        property_store::PropertyStore,
    },
    utils::i18n::{Locale, Translator},
};
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "browse", about = "Browse residences listings from the terminal")]
struct Args {
    /// Base URL of the listings API
    #[arg(long, default_value = "http://localhost:8000")]
    api_url: String,

    #[arg(long, default_value = "en")]
    locale: Locale,

    /// Dataset the server runs; selects currency and map provider
    #[arg(long, default_value = "us")]
    dataset: Dataset,

    /// Matches title, address or city
    #[arg(long)]
    search: Option<String>,

    #[arg(long)]
    min_price: Option<f64>,

    #[arg(long)]
    max_price: Option<f64>,

    /// Repeat to allow several types
    #[arg(long = "type")]
    property_type: Vec<PropertyType>,

    #[arg(long)]
    status: Option<PropertyStatus>,

    /// Minimum number of bedrooms
    #[arg(long)]
    beds: Option<u32>,

    #[arg(long)]
    city: Option<String>,

    /// Show one listing in detail
    #[arg(long)]
    id: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// A blank text input means "no filter", as when the field is cleared.
    /// Anything else is passed through as typed.
    fn text_patch(value: &Option<String>) -> Patch<String> {
        match value {
            None => Patch::Keep,
            Some(text) if text.trim().is_empty() => Patch::Clear,
            Some(text) => Patch::Set(text.clone()),
        }
    }

    fn to_update(&self) -> FilterUpdate {
        let mut update = FilterUpdate::new();
        update.search_query = Self::text_patch(&self.search);
        update.city = Self::text_patch(&self.city);

        if self.min_price.is_some() || self.max_price.is_some() {
            update.price_range = Some(PriceRange::new(self.min_price, self.max_price));
        }
        if !self.property_type.is_empty() {
            update = update.property_types(self.property_type.iter().copied());
        }
        if let Some(status) = self.status {
            update = update.status(status);
        }
        if let Some(beds) = self.beds {
            update = update.beds(beds);
        }

        update
    }
}

/// Localized message for a failed fetch. Only a 404 is reported as a
/// missing listing.
fn fetch_error_message(err: &ServiceError, t: &Translator, base_url: &str) -> String {
    if err.is_not_found() {
        t.t("property.notFound")
    } else {
        format!("{} ({})", t.t("common.error"), base_url)
    }
}

fn fetch_error(err: ServiceError, t: &Translator, base_url: &str) -> anyhow::Error {
    let message = fetch_error_message(&err, t, base_url);
    anyhow::Error::new(err).context(message)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { LevelFilter::DEBUG } else { LevelFilter::WARN })
        .with_writer(std::io::stderr)
        .init();

    let translator = Translator::new(args.locale).context("Failed to load translations")?;
    let client = ListingsClient::new(args.api_url.clone());
    let currency = args.dataset.currency();

    if let Some(id) = &args.id {
        let listing = client
            .fetch_listing(id)
            .await
            .map_err(|err| fetch_error(err, &translator, client.base_url()))?;
        let detail = PropertyDetailDto::from_property(&listing, &translator, currency);

        if args.json {
            println!("{}", serde_json::to_string_pretty(&detail)?);
        } else {
            println!("{}", detail);
        }
        return Ok(());
    }

    let mut store = PropertyStore::new();
    let loaded = load_into(&mut store, &client)
        .await
        .map_err(|err| fetch_error(err, &translator, client.base_url()))?;
    tracing::info!("Loaded {} listings", loaded);

    store.set_filters(args.to_update());
    let visible = store.filtered_properties();
    let cards: Vec<PropertyCardDto> = visible
        .iter()
        .map(|p| PropertyCardDto::from_property(p, &translator, currency))
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    println!("{}", translator.t("navigation.residences"));
    println!("{}\n", translator.t("common.discoverProperties"));

    if cards.is_empty() {
        println!("{}", translator.t("common.noProperties"));
        return Ok(());
    }

    for card in &cards {
        println!("{}\n", card);
    }

    let center = map_center(visible.iter().copied());
    let provider = args.dataset.map_provider();
    println!("{} {}", cards.len(), translator.t("common.results"));
    println!(
        "{} ({}): {:.4}, {:.4}",
        translator.t("common.mapCenter"),
        provider.name(),
        center.lat,
        center.lng
    );
    println!("{}", provider.link(center));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use residences::models::filtermodel::FilterCriteria;

    fn criteria_for(argv: &[&str]) -> FilterCriteria {
        let args = Args::parse_from(std::iter::once("browse").chain(argv.iter().copied()));
        let mut criteria = FilterCriteria::default();
        args.to_update().apply_to(&mut criteria);
        criteria
    }

    #[test]
    fn test_no_flags_leaves_criteria_empty() {
        assert!(criteria_for(&[]).is_empty());
    }

    #[test]
    fn test_flags_map_onto_criteria() {
        let criteria = criteria_for(&[
            "--search", "villa",
            "--min-price", "1000",
            "--type", "house",
            "--type", "land",
            "--status", "for-sale",
            "--beds", "2",
            "--city", "Miami",
        ]);

        assert_eq!(criteria.search_query.as_deref(), Some("villa"));
        assert_eq!(criteria.price_range, PriceRange::new(Some(1000.0), None));
        assert_eq!(criteria.property_type.len(), 2);
        assert_eq!(criteria.status, Some(PropertyStatus::ForSale));
        assert_eq!(criteria.beds, Some(2));
        assert_eq!(criteria.city.as_deref(), Some("Miami"));
    }

    #[test]
    fn test_blank_city_means_no_city_filter() {
        let criteria = criteria_for(&["--city", "  "]);
        assert!(criteria.city.is_none());
    }

    #[test]
    fn test_search_text_is_kept_as_typed() {
        let criteria = criteria_for(&["--search", " Drive"]);
        assert_eq!(criteria.search_query.as_deref(), Some(" Drive"));
    }

    #[test]
    fn test_only_404_is_reported_as_missing_listing() {
        let en = Translator::new(Locale::En).unwrap();
        let base_url = "http://localhost:8000";

        let missing = ServiceError::PropertyNotFound("42".to_string());
        assert_eq!(fetch_error_message(&missing, &en, base_url), "Property not found");

        let server_error = ServiceError::UnexpectedStatus {
            status: 500,
            url: format!("{}/api/listings/42", base_url),
        };
        assert_eq!(
            fetch_error_message(&server_error, &en, base_url),
            "Something went wrong (http://localhost:8000)"
        );

        let err = fetch_error(server_error, &en, base_url);
        assert_eq!(err.to_string(), "Something went wrong (http://localhost:8000)");
        assert!(err.downcast_ref::<ServiceError>().is_some());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_not_reported_as_missing() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let en = Translator::new(Locale::En).unwrap();
        let client = ListingsClient::new(base_url.clone());
        let err = client.fetch_listing("1").await.unwrap_err();

        assert!(!err.is_not_found());
        assert_eq!(
            fetch_error_message(&err, &en, client.base_url()),
            format!("Something went wrong ({})", base_url)
        );
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let result = Args::try_parse_from(["browse", "--type", "castle"]);
        assert!(result.is_err());
    }
}
