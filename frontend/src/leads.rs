use serde::Serialize;

/// A fixed, ordered set of values a toggle grid can choose between.
pub trait Choice: Copy + PartialEq + 'static {
    const ALL: &'static [Self];

    fn label(self) -> &'static str;
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[serde(rename = "Real Estate")]
    RealEstate,
    #[default]
    Tech,
    Fashion,
    Food,
    Health,
    Education,
    Other,
}

impl Choice for Category {
    const ALL: &'static [Self] = &[
        Category::RealEstate,
        Category::Tech,
        Category::Fashion,
        Category::Food,
        Category::Health,
        Category::Education,
        Category::Other,
    ];

    fn label(self) -> &'static str {
        match self {
            Category::RealEstate => "Real Estate",
            Category::Tech => "Tech",
            Category::Fashion => "Fashion",
            Category::Food => "Food",
            Category::Health => "Health",
            Category::Education => "Education",
            Category::Other => "Other",
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceRange {
    #[serde(rename = "<$100")]
    Under100,
    #[serde(rename = "$100+")]
    From100,
    #[default]
    #[serde(rename = "$200+")]
    From200,
    #[serde(rename = "$500+")]
    From500,
    #[serde(rename = "$1000+")]
    From1000,
}

impl Choice for PriceRange {
    const ALL: &'static [Self] = &[
        PriceRange::Under100,
        PriceRange::From100,
        PriceRange::From200,
        PriceRange::From500,
        PriceRange::From1000,
    ];

    fn label(self) -> &'static str {
        match self {
            PriceRange::Under100 => "<$100",
            PriceRange::From100 => "$100+",
            PriceRange::From200 => "$200+",
            PriceRange::From500 => "$500+",
            PriceRange::From1000 => "$1000+",
        }
    }
}

/// Reps always register as available; the field is not editable.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepStatus {
    #[default]
    Available,
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BusinessLead {
    pub business_name: String,
    pub product: String,
    pub category: Category,
    pub price_range: PriceRange,
    pub commission: String,
    pub email: String,
    pub phone: String,
}

impl BusinessLead {
    pub fn is_complete(&self) -> bool {
        [
            &self.business_name,
            &self.product,
            &self.commission,
            &self.email,
            &self.phone,
        ]
        .iter()
        .all(|field| present(field))
    }

    pub fn apply(&mut self, edit: BusinessEdit) {
        match edit {
            BusinessEdit::BusinessName(value) => self.business_name = value,
            BusinessEdit::Product(value) => self.product = value,
            BusinessEdit::Category(value) => self.category = value,
            BusinessEdit::PriceRange(value) => self.price_range = value,
            BusinessEdit::Commission(value) => self.commission = value,
            BusinessEdit::Email(value) => self.email = value,
            BusinessEdit::Phone(value) => self.phone = value,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RepLead {
    pub rep_name: String,
    pub category_preference: Category,
    pub preferred_price_range: PriceRange,
    pub email: String,
    pub phone: String,
    pub status: RepStatus,
}

impl RepLead {
    pub fn is_complete(&self) -> bool {
        [&self.rep_name, &self.email, &self.phone]
            .iter()
            .all(|field| present(field))
    }

    pub fn apply(&mut self, edit: RepEdit) {
        match edit {
            RepEdit::RepName(value) => self.rep_name = value,
            RepEdit::CategoryPreference(value) => self.category_preference = value,
            RepEdit::PreferredPriceRange(value) => self.preferred_price_range = value,
            RepEdit::Email(value) => self.email = value,
            RepEdit::Phone(value) => self.phone = value,
        }
    }
}

fn present(value: &str) -> bool {
    !value.trim().is_empty()
}

#[derive(Debug, Clone, PartialEq)]
pub enum BusinessEdit {
    BusinessName(String),
    Product(String),
    Category(Category),
    PriceRange(PriceRange),
    Commission(String),
    Email(String),
    Phone(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum RepEdit {
    RepName(String),
    CategoryPreference(Category),
    PreferredPriceRange(PriceRange),
    Email(String),
    Phone(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadKind {
    Business,
    Rep,
}

/// The payload posted to the lead sheet. `type` tells the two shapes apart.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum Lead {
    #[serde(rename = "business")]
    Business(BusinessLead),
    #[serde(rename = "rep")]
    Rep(RepLead),
}

impl Lead {
    pub fn kind(&self) -> LeadKind {
        match self {
            Lead::Business(_) => LeadKind::Business,
            Lead::Rep(_) => LeadKind::Rep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn acme() -> BusinessLead {
        BusinessLead {
            business_name: "Acme".to_string(),
            product: "Widgets".to_string(),
            category: Category::Tech,
            price_range: PriceRange::From200,
            commission: "10".to_string(),
            email: "a@b.com".to_string(),
            phone: "555-0100".to_string(),
        }
    }

    #[test]
    fn business_payload_has_seven_fields_and_tag() {
        let value = serde_json::to_value(Lead::Business(acme())).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "business",
                "businessName": "Acme",
                "product": "Widgets",
                "category": "Tech",
                "priceRange": "$200+",
                "commission": "10",
                "email": "a@b.com",
                "phone": "555-0100",
            })
        );
        assert_eq!(value.as_object().map(|o| o.len()), Some(8));
    }

    #[test]
    fn rep_payload_carries_constant_status() {
        let rep = RepLead {
            rep_name: "Jo".to_string(),
            category_preference: Category::RealEstate,
            preferred_price_range: PriceRange::Under100,
            email: "jo@example.com".to_string(),
            phone: "555-0199".to_string(),
            ..RepLead::default()
        };
        let value = serde_json::to_value(Lead::Rep(rep)).unwrap();
        assert_eq!(value["type"], Value::from("rep"));
        assert_eq!(value["categoryPreference"], Value::from("Real Estate"));
        assert_eq!(value["preferredPriceRange"], Value::from("<$100"));
        assert_eq!(value["status"], Value::from("Available"));
    }

    #[test]
    fn defaults_match_documented_values() {
        let business = BusinessLead::default();
        assert_eq!(business.category, Category::Tech);
        assert_eq!(business.price_range, PriceRange::From200);
        assert!(business.business_name.is_empty());

        let rep = RepLead::default();
        assert_eq!(rep.category_preference, Category::Tech);
        assert_eq!(rep.preferred_price_range, PriceRange::From200);
        assert_eq!(rep.status, RepStatus::Available);
    }

    #[test]
    fn labels_match_serialized_names() {
        for category in Category::ALL {
            assert_eq!(serde_json::to_value(category).unwrap(), Value::from(category.label()));
        }
        for range in PriceRange::ALL {
            assert_eq!(serde_json::to_value(range).unwrap(), Value::from(range.label()));
        }
    }

    #[test]
    fn any_blank_required_field_makes_business_incomplete() {
        assert!(acme().is_complete());
        let blanks = [
            BusinessEdit::BusinessName(String::new()),
            BusinessEdit::Product("   ".to_string()),
            BusinessEdit::Commission(String::new()),
            BusinessEdit::Email(String::new()),
            BusinessEdit::Phone(String::new()),
        ];
        for blank in blanks {
            let mut lead = acme();
            lead.apply(blank.clone());
            assert!(!lead.is_complete(), "{:?} should block submit", blank);
        }
    }

    #[test]
    fn rep_requires_name_email_and_phone() {
        let mut rep = RepLead::default();
        assert!(!rep.is_complete());
        rep.apply(RepEdit::RepName("Jo".to_string()));
        rep.apply(RepEdit::Email("jo@example.com".to_string()));
        assert!(!rep.is_complete());
        rep.apply(RepEdit::Phone("555".to_string()));
        assert!(rep.is_complete());
    }
}
