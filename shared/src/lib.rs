use serde::{Deserialize, Serialize};

/// A restaurant record as exchanged with the backend.
///
/// The backend assigns `id`; everything else is user-entered. Field names
/// are camelCase on the wire (`imageUrl`, `contactNumber`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: i64,
    pub image_url: String,
    pub name: String,
    pub description: String,
    pub location: String,
    /// 10-digit numeric string
    pub contact_number: String,
    pub email: String,
}

/// Payload for creating a restaurant (the backend assigns the id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDraft {
    pub image_url: String,
    pub name: String,
    pub description: String,
    pub location: String,
    pub contact_number: String,
    pub email: String,
}

impl RestaurantDraft {
    /// Attach an id to produce a full record, e.g. for a `PUT` body.
    pub fn into_restaurant(self, id: i64) -> Restaurant {
        Restaurant {
            id,
            image_url: self.image_url,
            name: self.name,
            description: self.description,
            location: self.location,
            contact_number: self.contact_number,
            email: self.email,
        }
    }
}

/// Configuration for the restaurant management UI
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RestaurantUiConfig {
    pub page_size: usize,
    pub max_description_length: usize,
    pub api_base_url: String,
}

impl Default for RestaurantUiConfig {
    fn default() -> Self {
        Self {
            page_size: 4,
            max_description_length: 256,
            api_base_url: "http://localhost:3000".to_string(),
        }
    }
}

/// Form validation result for the restaurant create/edit forms
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RestaurantFormValidation {
    pub is_valid: bool,
    pub errors: Vec<RestaurantValidationError>,
}

/// Specific validation errors for restaurant forms
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum RestaurantValidationError {
    EmptyImageUrl,
    EmptyName,
    EmptyDescription,
    DescriptionTooLong(usize),
    EmptyLocation,
    EmptyContactNumber,
    InvalidContactNumber(String),
    EmptyEmail,
    InvalidEmail(String),
}

/// Form input a validation error belongs to, for inline display
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FormField {
    ImageUrl,
    Name,
    Description,
    Location,
    ContactNumber,
    Email,
}

impl RestaurantValidationError {
    /// The field this error should be shown next to
    pub fn field(&self) -> FormField {
        match self {
            RestaurantValidationError::EmptyImageUrl => FormField::ImageUrl,
            RestaurantValidationError::EmptyName => FormField::Name,
            RestaurantValidationError::EmptyDescription
            | RestaurantValidationError::DescriptionTooLong(_) => FormField::Description,
            RestaurantValidationError::EmptyLocation => FormField::Location,
            RestaurantValidationError::EmptyContactNumber
            | RestaurantValidationError::InvalidContactNumber(_) => FormField::ContactNumber,
            RestaurantValidationError::EmptyEmail
            | RestaurantValidationError::InvalidEmail(_) => FormField::Email,
        }
    }

    /// Human-readable message for inline form display
    pub fn message(&self) -> String {
        match self {
            RestaurantValidationError::EmptyImageUrl => "Please enter an image URL".to_string(),
            RestaurantValidationError::EmptyName => "Please enter the restaurant's name".to_string(),
            RestaurantValidationError::EmptyDescription => "Please enter a description".to_string(),
            RestaurantValidationError::DescriptionTooLong(len) => {
                format!("Description is too long ({} characters)", len)
            }
            RestaurantValidationError::EmptyLocation => "Please enter a location".to_string(),
            RestaurantValidationError::EmptyContactNumber => {
                "Please enter a contact number".to_string()
            }
            RestaurantValidationError::InvalidContactNumber(_) => {
                "Contact number must be exactly 10 digits".to_string()
            }
            RestaurantValidationError::EmptyEmail => "Please enter an email address".to_string(),
            RestaurantValidationError::InvalidEmail(_) => {
                "Please enter a valid email address".to_string()
            }
        }
    }
}

/// State for managing restaurant input forms
///
/// Backs both the inline edit form on the list page and the standalone
/// creation form. Fields hold raw input strings; `to_draft` trims them
/// for submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RestaurantFormState {
    pub image_url: String,
    pub name: String,
    pub description: String,
    pub location: String,
    pub contact_number: String,
    pub email: String,
}

impl RestaurantFormState {
    /// Copy a record's fields into the form for editing.
    pub fn load(restaurant: &Restaurant) -> Self {
        Self {
            image_url: restaurant.image_url.clone(),
            name: restaurant.name.clone(),
            description: restaurant.description.clone(),
            location: restaurant.location.clone(),
            contact_number: restaurant.contact_number.clone(),
            email: restaurant.email.clone(),
        }
    }

    /// Reset all fields to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Build the submission payload from the current (trimmed) input.
    pub fn to_draft(&self) -> RestaurantDraft {
        RestaurantDraft {
            image_url: self.image_url.trim().to_string(),
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            location: self.location.trim().to_string(),
            contact_number: self.contact_number.trim().to_string(),
            email: self.email.trim().to_string(),
        }
    }

    /// Validate the current input against the submission rules.
    ///
    /// Every field is required; the contact number must be exactly 10
    /// digits and the email structurally well-formed. Submission is
    /// blocked while any error is present.
    pub fn validate(&self, config: &RestaurantUiConfig) -> RestaurantFormValidation {
        let mut errors = Vec::new();

        if self.image_url.trim().is_empty() {
            errors.push(RestaurantValidationError::EmptyImageUrl);
        }

        if self.name.trim().is_empty() {
            errors.push(RestaurantValidationError::EmptyName);
        }

        let description = self.description.trim();
        if description.is_empty() {
            errors.push(RestaurantValidationError::EmptyDescription);
        } else if description.len() > config.max_description_length {
            errors.push(RestaurantValidationError::DescriptionTooLong(
                description.len(),
            ));
        }

        if self.location.trim().is_empty() {
            errors.push(RestaurantValidationError::EmptyLocation);
        }

        let contact_number = self.contact_number.trim();
        if contact_number.is_empty() {
            errors.push(RestaurantValidationError::EmptyContactNumber);
        } else if !is_valid_contact_number(contact_number) {
            errors.push(RestaurantValidationError::InvalidContactNumber(
                contact_number.to_string(),
            ));
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(RestaurantValidationError::EmptyEmail);
        } else if !is_well_formed_email(email) {
            errors.push(RestaurantValidationError::InvalidEmail(email.to_string()));
        }

        RestaurantFormValidation {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Contact numbers are exactly 10 ASCII digits.
fn is_valid_contact_number(value: &str) -> bool {
    value.len() == 10 && value.chars().all(|c| c.is_ascii_digit())
}

/// Structural email check: one `@`, non-empty local part, and a domain
/// containing an interior dot. Anything stricter belongs to the backend.
fn is_well_formed_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = match parts.next() {
        Some(domain) => domain,
        None => return false,
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// List view state: the fetched records plus filter, pagination, and the
/// current edit selection.
///
/// The filtered subset and the page slice are derived on demand from
/// (records, query, page) and never cached, so the displayed list is a
/// deterministic function of this struct.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantListState {
    /// All currently loaded restaurants, wholesale-replaced on refresh
    pub restaurants: Vec<Restaurant>,
    /// Free-text filter matched against name and location
    pub query: String,
    /// Fixed number of rows shown per page
    pub page_size: usize,
    /// Current page, 1-based
    pub current_page: usize,
    /// Id of the record loaded into the edit form, if any
    pub editing_id: Option<i64>,
}

impl RestaurantListState {
    pub fn new() -> Self {
        Self::with_page_size(RestaurantUiConfig::default().page_size)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            restaurants: Vec::new(),
            query: String::new(),
            page_size,
            current_page: 1,
            editing_id: None,
        }
    }

    /// Replace the full list after a fetch and go back to the first page.
    pub fn set_restaurants(&mut self, restaurants: Vec<Restaurant>) {
        self.restaurants = restaurants;
        self.current_page = 1;
    }

    /// Update the search query; filtering restarts from the first page.
    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.current_page = 1;
    }

    /// Case-insensitive substring match of the query against name OR
    /// location.
    pub fn filtered(&self) -> Vec<Restaurant> {
        let query = self.query.to_lowercase();
        self.restaurants
            .iter()
            .filter(|restaurant| {
                restaurant.name.to_lowercase().contains(&query)
                    || restaurant.location.to_lowercase().contains(&query)
            })
            .cloned()
            .collect()
    }

    pub fn total_pages(&self) -> usize {
        let filtered_len = self.filtered().len();
        (filtered_len + self.page_size - 1) / self.page_size
    }

    /// The sub-range of the filtered list shown for the current page.
    pub fn page_slice(&self) -> Vec<Restaurant> {
        let filtered = self.filtered();
        let start = (self.current_page - 1) * self.page_size;
        if start >= filtered.len() {
            return Vec::new();
        }
        let end = (start + self.page_size).min(filtered.len());
        filtered[start..end].to_vec()
    }

    /// Move to `page` if it is within `[1, total_pages]`; out-of-range
    /// requests are ignored.
    pub fn change_page(&mut self, page: usize) {
        if page >= 1 && page <= self.total_pages() {
            self.current_page = page;
        }
    }

    /// Remember which record the edit form is bound to.
    pub fn start_edit(&mut self, id: i64) {
        self.editing_id = Some(id);
    }

    /// Drop the edit selection; the caller clears the form alongside.
    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Look up a loaded record by id.
    pub fn find(&self, id: i64) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id == id)
    }
}

impl Default for RestaurantListState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(id: i64, name: &str, location: &str) -> Restaurant {
        Restaurant {
            id,
            image_url: format!("https://example.com/{}.jpg", id),
            name: name.to_string(),
            description: format!("{} serves good food", name),
            location: location.to_string(),
            contact_number: "9876543210".to_string(),
            email: format!("contact{}@example.com", id),
        }
    }

    fn state_with(restaurants: Vec<Restaurant>) -> RestaurantListState {
        let mut state = RestaurantListState::new();
        state.set_restaurants(restaurants);
        state
    }

    fn valid_form() -> RestaurantFormState {
        RestaurantFormState {
            image_url: "https://example.com/kitchen.jpg".to_string(),
            name: "Karim's".to_string(),
            description: "Mughlai classics near Jama Masjid".to_string(),
            location: "Delhi".to_string(),
            contact_number: "9876543210".to_string(),
            email: "karims@example.com".to_string(),
        }
    }

    #[test]
    fn test_filter_matches_name_or_location_case_insensitive() {
        let mut state = state_with(vec![
            restaurant(1, "Karim's", "Delhi"),
            restaurant(2, "Saravana Bhavan", "Chennai"),
            restaurant(3, "Delhi Darbar", "Mumbai"),
        ]);
        state.set_query("delhi".to_string());

        // Matches "Delhi" in location (1) and in name (3), excludes 2
        let ids: Vec<i64> = state.filtered().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let mut state = state_with(vec![
            restaurant(1, "Karim's", "Delhi"),
            restaurant(2, "Saravana Bhavan", "Chennai"),
            restaurant(3, "Delhi Darbar", "Mumbai"),
        ]);
        state.set_query("delhi".to_string());

        let once = state.filtered();
        let mut refiltered = RestaurantListState::new();
        refiltered.set_restaurants(once.clone());
        refiltered.set_query("delhi".to_string());
        assert_eq!(refiltered.filtered(), once);
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let state = state_with(vec![
            restaurant(1, "Karim's", "Delhi"),
            restaurant(2, "Saravana Bhavan", "Chennai"),
        ]);
        assert_eq!(state.filtered().len(), 2);
    }

    #[test]
    fn test_filtering_does_not_mutate_source_list() {
        let mut state = state_with(vec![
            restaurant(1, "Karim's", "Delhi"),
            restaurant(2, "Saravana Bhavan", "Chennai"),
        ]);
        state.set_query("delhi".to_string());
        let _ = state.filtered();
        let _ = state.page_slice();
        assert_eq!(state.restaurants.len(), 2);
    }

    #[test]
    fn test_five_records_paginate_into_two_pages() {
        let mut state = state_with(vec![
            restaurant(1, "One", "Delhi"),
            restaurant(2, "Two", "Delhi"),
            restaurant(3, "Three", "Delhi"),
            restaurant(4, "Four", "Delhi"),
            restaurant(5, "Five", "Delhi"),
        ]);

        assert_eq!(state.total_pages(), 2);

        // Page 1 shows items 1-4
        let page_one: Vec<i64> = state.page_slice().iter().map(|r| r.id).collect();
        assert_eq!(page_one, vec![1, 2, 3, 4]);

        // Page 2 shows the single remaining item
        state.change_page(2);
        let page_two: Vec<i64> = state.page_slice().iter().map(|r| r.id).collect();
        assert_eq!(page_two, vec![5]);
    }

    #[test]
    fn test_page_slice_never_exceeds_page_size() {
        let restaurants: Vec<Restaurant> = (1..=11)
            .map(|id| restaurant(id, "Place", "Delhi"))
            .collect();
        let mut state = state_with(restaurants);

        for page in 1..=state.total_pages() {
            state.change_page(page);
            assert!(state.page_slice().len() <= state.page_size);
        }
        // Last page holds the remainder
        state.change_page(state.total_pages());
        assert_eq!(state.page_slice().len(), 3);
    }

    #[test]
    fn test_change_page_rejects_out_of_range() {
        let mut state = state_with(vec![
            restaurant(1, "One", "Delhi"),
            restaurant(2, "Two", "Delhi"),
            restaurant(3, "Three", "Delhi"),
            restaurant(4, "Four", "Delhi"),
            restaurant(5, "Five", "Delhi"),
        ]);

        state.change_page(0);
        assert_eq!(state.current_page, 1);

        state.change_page(3);
        assert_eq!(state.current_page, 1);

        state.change_page(2);
        assert_eq!(state.current_page, 2);
    }

    #[test]
    fn test_change_page_is_noop_on_empty_list() {
        let mut state = RestaurantListState::new();
        assert_eq!(state.total_pages(), 0);
        state.change_page(1);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_query_change_resets_page() {
        let restaurants: Vec<Restaurant> = (1..=9)
            .map(|id| restaurant(id, "Place", "Delhi"))
            .collect();
        let mut state = state_with(restaurants);

        state.change_page(2);
        assert_eq!(state.current_page, 2);

        state.set_query("place".to_string());
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_refresh_resets_page() {
        let restaurants: Vec<Restaurant> = (1..=9)
            .map(|id| restaurant(id, "Place", "Delhi"))
            .collect();
        let mut state = state_with(restaurants.clone());

        state.change_page(3);
        state.set_restaurants(restaurants);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_edit_then_cancel_clears_selection_and_form() {
        let mut state = state_with(vec![
            restaurant(1, "One", "Delhi"),
            restaurant(2, "Two", "Delhi"),
            restaurant(3, "Three", "Delhi"),
        ]);
        let before = state.restaurants.clone();

        let selected = state.find(3).cloned().unwrap();
        state.start_edit(selected.id);
        let mut form = RestaurantFormState::load(&selected);
        assert_eq!(state.editing_id, Some(3));
        assert_eq!(form.name, "Three");

        state.cancel_edit();
        form.clear();

        assert_eq!(state.editing_id, None);
        assert!(form.is_empty());
        assert_eq!(state.restaurants, before);
    }

    #[test]
    fn test_submit_for_selected_record_targets_its_id() {
        let mut state = state_with(vec![restaurant(3, "Three", "Delhi")]);
        let selected = state.find(3).cloned().unwrap();
        state.start_edit(selected.id);

        let mut form = RestaurantFormState::load(&selected);
        form.name = "Three Renamed".to_string();

        let updated = form.to_draft().into_restaurant(state.editing_id.unwrap());
        assert_eq!(updated.id, 3);
        assert_eq!(updated.name, "Three Renamed");
        assert_eq!(updated.location, "Delhi");
    }

    #[test]
    fn test_form_load_copies_all_fields() {
        let record = restaurant(7, "Seven", "Pune");
        let form = RestaurantFormState::load(&record);
        assert_eq!(form.to_draft().into_restaurant(7), record);
    }

    #[test]
    fn test_validate_accepts_complete_form() {
        let validation = valid_form().validate(&RestaurantUiConfig::default());
        assert!(validation.is_valid);
        assert!(validation.errors.is_empty());
    }

    #[test]
    fn test_validate_requires_every_field() {
        let validation = RestaurantFormState::default().validate(&RestaurantUiConfig::default());
        assert!(!validation.is_valid);
        assert_eq!(
            validation.errors,
            vec![
                RestaurantValidationError::EmptyImageUrl,
                RestaurantValidationError::EmptyName,
                RestaurantValidationError::EmptyDescription,
                RestaurantValidationError::EmptyLocation,
                RestaurantValidationError::EmptyContactNumber,
                RestaurantValidationError::EmptyEmail,
            ]
        );
    }

    #[test]
    fn test_validate_blank_fields_are_treated_as_empty() {
        let mut form = valid_form();
        form.name = "   ".to_string();
        let validation = form.validate(&RestaurantUiConfig::default());
        assert!(validation
            .errors
            .contains(&RestaurantValidationError::EmptyName));
    }

    #[test]
    fn test_validate_contact_number_pattern() {
        let config = RestaurantUiConfig::default();

        for bad in ["123456789", "12345678901", "98765abc10", "98765 4321"] {
            let mut form = valid_form();
            form.contact_number = bad.to_string();
            let validation = form.validate(&config);
            assert!(
                validation
                    .errors
                    .contains(&RestaurantValidationError::InvalidContactNumber(
                        bad.to_string()
                    )),
                "expected {:?} to be rejected",
                bad
            );
        }

        let mut form = valid_form();
        form.contact_number = "0123456789".to_string();
        assert!(form.validate(&config).is_valid);
    }

    #[test]
    fn test_validate_email_format() {
        let config = RestaurantUiConfig::default();

        for bad in ["plainaddress", "@no-local.com", "a@b", "a b@c.com", "a@.com"] {
            let mut form = valid_form();
            form.email = bad.to_string();
            let validation = form.validate(&config);
            assert!(
                validation
                    .errors
                    .contains(&RestaurantValidationError::InvalidEmail(bad.to_string())),
                "expected {:?} to be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_validate_description_length_limit() {
        let config = RestaurantUiConfig::default();
        let mut form = valid_form();
        form.description = "x".repeat(config.max_description_length + 1);
        let validation = form.validate(&config);
        assert!(validation
            .errors
            .contains(&RestaurantValidationError::DescriptionTooLong(
                config.max_description_length + 1
            )));
    }

    #[test]
    fn test_validation_errors_map_to_their_field() {
        let mut form = valid_form();
        form.contact_number = "12345".to_string();
        form.email = "not-an-email".to_string();

        let validation = form.validate(&RestaurantUiConfig::default());
        let fields: Vec<FormField> = validation.errors.iter().map(|e| e.field()).collect();
        assert_eq!(fields, vec![FormField::ContactNumber, FormField::Email]);
    }

    #[test]
    fn test_wire_format_uses_camel_case() {
        let record = restaurant(1, "Karim's", "Delhi");
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("imageUrl").is_some());
        assert!(value.get("contactNumber").is_some());
        assert!(value.get("image_url").is_none());

        let draft = RestaurantFormState::load(&record).to_draft();
        let value = serde_json::to_value(&draft).unwrap();
        assert!(value.get("id").is_none(), "drafts must not carry an id");
    }
}
