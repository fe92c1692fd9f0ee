use std::fmt;

use serde::Serialize;

use crate::{
    models::propertymodel::{Broker, Property},
    utils::{
        currency::{format_price, group_thousands, Currency},
        i18n::Translator,
    },
};

/// Localized summary shown in the listing grid.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyCardDto {
    pub id: String,
    pub title: String,
    pub price: String,
    pub status: String,
    pub property_type: String,
    pub address: String,
    pub beds: String,
    pub baths: String,
    pub sqft: String,
    pub image: Option<String>,
}

impl PropertyCardDto {
    pub fn from_property(property: &Property, t: &Translator, currency: Currency) -> Self {
        Self {
            id: property.id.clone(),
            title: property.title.clone(),
            price: format_price(property.price, currency),
            status: t.t(property.status.label_key()),
            property_type: t.t(&property.property_type.label_key()),
            address: format!(
                "{}, {}, {}",
                property.location.address, property.location.city, property.location.state
            ),
            beds: format!("{} {}", property.beds, t.t("property.beds")),
            baths: format!("{} {}", property.baths, t.t("property.baths")),
            sqft: format!(
                "{} {}",
                group_thousands(u64::from(property.sqft), ','),
                t.t("property.sqft")
            ),
            image: property.images.first().cloned(),
        }
    }
}

impl fmt::Display for PropertyCardDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}] {}  {}", self.id, self.title, self.price)?;
        writeln!(f, "    {} · {}", self.property_type, self.status)?;
        writeln!(f, "    {}", self.address)?;
        write!(f, "    {} | {} | {}", self.beds, self.baths, self.sqft)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDto {
    pub title: String,
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Localized detail view of one listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDetailDto {
    #[serde(flatten)]
    pub card: PropertyCardDto,
    pub description: String,
    pub year_built: String,
    pub features: Vec<String>,
    pub features_label: String,
    pub images: Vec<String>,
    pub contact: Option<ContactDto>,
}

impl PropertyDetailDto {
    pub fn from_property(property: &Property, t: &Translator, currency: Currency) -> Self {
        Self {
            card: PropertyCardDto::from_property(property, t, currency),
            description: property.description.clone(),
            year_built: format!("{}: {}", t.t("property.yearBuilt"), property.year_built),
            features: property.features.clone(),
            features_label: t.t("property.features"),
            images: property.images.clone(),
            contact: property.broker.as_ref().map(|broker| contact(broker, t)),
        }
    }
}

fn contact(broker: &Broker, t: &Translator) -> ContactDto {
    ContactDto {
        title: t.t("contact.title"),
        name: format!("{}: {}", t.t("contact.agent"), broker.name),
        phone: format!("{}: {}", t.t("contact.phone"), broker.phone),
        email: format!("{}: {}", t.t("contact.email"), broker.email),
    }
}

impl fmt::Display for PropertyDetailDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.card)?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f, "{}", self.year_built)?;
        if !self.features.is_empty() {
            writeln!(f, "{}: {}", self.features_label, self.features.join(", "))?;
        }
        if let Some(contact) = &self.contact {
            writeln!(f)?;
            writeln!(f, "{}", contact.title)?;
            writeln!(f, "    {}", contact.name)?;
            writeln!(f, "    {}", contact.phone)?;
            writeln!(f, "    {}", contact.email)?;
        }
        Ok(())
    }
}
