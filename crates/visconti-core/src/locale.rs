//! User-facing string tables
//!
//! Every view reads its text from a [`Strings`] table chosen once at startup,
//! so behavior and presentation are defined a single time for both languages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported interface languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Italian
    It,
}

impl Locale {
    /// Every supported locale
    pub const ALL: [Self; 2] = [Self::En, Self::It];

    /// Short identifier used in configuration
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::It => "it",
        }
    }

    /// String table for this locale
    pub const fn strings(self) -> &'static Strings {
        match self {
            Self::En => &EN,
            Self::It => &IT,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "it" | "italian" | "italiano" => Ok(Self::It),
            other => Err(crate::Error::configuration(format!(
                "unsupported locale '{other}'"
            ))),
        }
    }
}

/// Lookup table of every user-facing string
#[derive(Debug)]
#[allow(missing_docs)]
pub struct Strings {
    // Shell
    pub app_title: &'static str,
    pub nav_dashboard: &'static str,
    pub nav_menu: &'static str,
    pub nav_offers: &'static str,
    pub nav_settings: &'static str,
    pub nav_menu_images: &'static str,
    pub logout: &'static str,
    pub welcome: &'static str,
    pub toggle_sidebar: &'static str,
    pub open_navigation: &'static str,
    pub close_navigation: &'static str,

    // Login
    pub login_title: &'static str,
    pub login_token_label: &'static str,
    pub login_submit: &'static str,
    pub login_token_required: &'static str,

    // Dashboard
    pub stat_orders_today: &'static str,
    pub stat_revenue_today: &'static str,
    pub stat_menu_items: &'static str,
    pub stat_active_orders: &'static str,
    pub coming_soon: &'static str,
    pub loading: &'static str,

    // Menu management
    pub menu_title: &'static str,
    pub all_categories: &'static str,
    pub add_item: &'static str,
    pub add_item_title: &'static str,
    pub edit_item_title: &'static str,
    pub field_name: &'static str,
    pub field_description: &'static str,
    pub field_price: &'static str,
    pub field_category: &'static str,
    pub field_image: &'static str,
    pub placeholder_name: &'static str,
    pub placeholder_description: &'static str,
    pub click_to_upload: &'static str,
    pub preview: &'static str,
    pub save_new_item: &'static str,
    pub save_existing_item: &'static str,
    pub cancel: &'static str,
    pub loading_menu: &'static str,
    pub no_menu_items: &'static str,
    pub add_first_item: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    pub page: &'static str,
    pub of: &'static str,
    pub confirm_delete_item: &'static str,

    // Offer badges
    pub offers_new_title: &'static str,
    pub offers_all_title: &'static str,
    pub field_title: &'static str,
    pub field_discount: &'static str,
    pub field_expiry_date: &'static str,
    pub badge_fields_required: &'static str,
    pub add_badge: &'static str,
    pub adding_badge: &'static str,
    pub loading_badges: &'static str,
    pub no_badges: &'static str,
    pub percent_off: &'static str,
    pub expires: &'static str,
    pub confirm_delete_badge: &'static str,

    // Menu image gallery
    pub gallery_title: &'static str,
    pub gallery_intro: &'static str,
    pub upload_new_image: &'static str,
    pub drag_or_click: &'static str,
    pub select_image: &'static str,
    pub remove: &'static str,
    pub upload_image: &'static str,
    pub uploading: &'static str,
    pub uploaded_images: &'static str,
    pub uploaded_on: &'static str,
    pub no_images: &'static str,
    pub no_images_hint: &'static str,
    pub confirm_delete_image: &'static str,
    pub msg_select_image_file: &'static str,
    pub msg_image_too_large: &'static str,
    pub msg_select_first: &'static str,
    pub msg_upload_success: &'static str,
    pub msg_upload_failed: &'static str,
    pub msg_delete_success: &'static str,
    pub msg_delete_failed: &'static str,
    pub msg_fetch_failed: &'static str,

    // Settings
    pub settings_title: &'static str,
    pub settings_api_base_url: &'static str,
    pub settings_locale: &'static str,

    // Not found
    pub not_found_title: &'static str,
    pub not_found_body: &'static str,
    pub back_to_dashboard: &'static str,
}

/// English strings
pub static EN: Strings = Strings {
    app_title: "Visconti Admin",
    nav_dashboard: "Dashboard",
    nav_menu: "Menu Management",
    nav_offers: "Offers",
    nav_settings: "Settings",
    nav_menu_images: "Menu Images",
    logout: "Logout",
    welcome: "Welcome, Admin",
    toggle_sidebar: "Toggle sidebar",
    open_navigation: "Open navigation",
    close_navigation: "Close navigation",

    login_title: "Admin Login",
    login_token_label: "Access token",
    login_submit: "Sign in",
    login_token_required: "Please enter an access token",

    stat_orders_today: "Total Orders Today",
    stat_revenue_today: "Revenue Today",
    stat_menu_items: "Menu Items",
    stat_active_orders: "Active Orders",
    coming_soon: "Coming Soon",
    loading: "Loading...",

    menu_title: "Menu Management",
    all_categories: "All Categories",
    add_item: "Add Item",
    add_item_title: "Add Menu Item",
    edit_item_title: "Edit Menu Item",
    field_name: "Name",
    field_description: "Description",
    field_price: "Price",
    field_category: "Category",
    field_image: "Image",
    placeholder_name: "Item name",
    placeholder_description: "Item description",
    click_to_upload: "Click to upload",
    preview: "Preview",
    save_new_item: "Add Item",
    save_existing_item: "Update Item",
    cancel: "Cancel",
    loading_menu: "Loading menu items...",
    no_menu_items: "No menu items found.",
    add_first_item: "Add Your First Item",
    edit: "Edit",
    delete: "Delete",
    previous: "Previous",
    next: "Next",
    page: "Page",
    of: "of",
    confirm_delete_item: "Are you sure you want to delete this item?",

    offers_new_title: "Add New Offer Badge",
    offers_all_title: "All Offer Badges",
    field_title: "Title",
    field_discount: "Discount %",
    field_expiry_date: "Expiry Date",
    badge_fields_required: "Title, discount and expiry date are required",
    add_badge: "Add Badge",
    adding_badge: "Adding...",
    loading_badges: "Loading badges...",
    no_badges: "No badges found.",
    percent_off: "% OFF",
    expires: "Expires:",
    confirm_delete_badge: "Are you sure you want to delete this badge?",

    gallery_title: "Menu Image Management",
    gallery_intro: "Upload and manage images of your physical menu that will be displayed to customers.",
    upload_new_image: "Upload New Image",
    drag_or_click: "Drag & drop or click to upload",
    select_image: "Select Image",
    remove: "Remove",
    upload_image: "Upload Image",
    uploading: "Uploading...",
    uploaded_images: "Uploaded Images",
    uploaded_on: "Uploaded:",
    no_images: "No images yet",
    no_images_hint: "Upload your first image to get started.",
    confirm_delete_image: "Are you sure you want to delete this image?",
    msg_select_image_file: "Please select an image file (JPG, PNG, WEBP)",
    msg_image_too_large: "Image must be less than 5MB",
    msg_select_first: "Please select an image first",
    msg_upload_success: "Image uploaded successfully!",
    msg_upload_failed: "Upload failed",
    msg_delete_success: "Image deleted successfully!",
    msg_delete_failed: "Delete failed",
    msg_fetch_failed: "Error fetching images",

    settings_title: "Settings",
    settings_api_base_url: "API base URL",
    settings_locale: "Language",

    not_found_title: "Page Not Found",
    not_found_body: "The page you are looking for does not exist.",
    back_to_dashboard: "Return to Dashboard",
};

/// Italian strings
pub static IT: Strings = Strings {
    app_title: "Visconti Admin",
    nav_dashboard: "Pannello",
    nav_menu: "Gestione Menu",
    nav_offers: "Offerte",
    nav_settings: "Impostazioni",
    nav_menu_images: "Immagini Menu",
    logout: "Esci",
    welcome: "Benvenuto, Admin",
    toggle_sidebar: "Mostra/nascondi barra laterale",
    open_navigation: "Apri navigazione",
    close_navigation: "Chiudi navigazione",

    login_title: "Accesso Amministratore",
    login_token_label: "Token di accesso",
    login_submit: "Accedi",
    login_token_required: "Inserisci un token di accesso",

    stat_orders_today: "Ordini Totali Oggi",
    stat_revenue_today: "Incasso Oggi",
    stat_menu_items: "Piatti nel Menu",
    stat_active_orders: "Ordini Attivi",
    coming_soon: "Prossimamente",
    loading: "Caricamento...",

    menu_title: "Gestione Menu",
    all_categories: "Tutte le Categorie",
    add_item: "Aggiungi Piatto",
    add_item_title: "Aggiungi Piatto al Menu",
    edit_item_title: "Modifica Piatto",
    field_name: "Nome",
    field_description: "Descrizione",
    field_price: "Prezzo",
    field_category: "Categoria",
    field_image: "Immagine",
    placeholder_name: "Nome del piatto",
    placeholder_description: "Descrizione del piatto",
    click_to_upload: "Clicca per caricare",
    preview: "Anteprima",
    save_new_item: "Aggiungi Piatto",
    save_existing_item: "Aggiorna Piatto",
    cancel: "Annulla",
    loading_menu: "Caricamento menu...",
    no_menu_items: "Nessun piatto trovato.",
    add_first_item: "Aggiungi il Primo Piatto",
    edit: "Modifica",
    delete: "Elimina",
    previous: "Precedente",
    next: "Successiva",
    page: "Pagina",
    of: "di",
    confirm_delete_item: "Sei sicuro di voler eliminare questo piatto?",

    offers_new_title: "Nuovo Badge Offerta",
    offers_all_title: "Tutti i Badge Offerta",
    field_title: "Titolo",
    field_discount: "Sconto %",
    field_expiry_date: "Data di Scadenza",
    badge_fields_required: "Titolo, sconto e data di scadenza sono obbligatori",
    add_badge: "Aggiungi Badge",
    adding_badge: "Aggiunta in corso...",
    loading_badges: "Caricamento badge...",
    no_badges: "Nessun badge trovato.",
    percent_off: "% DI SCONTO",
    expires: "Scade:",
    confirm_delete_badge: "Sei sicuro di voler eliminare questo badge?",

    gallery_title: "Gestione Immagini Menu",
    gallery_intro: "Carica e gestisci le foto del menu cartaceo mostrate ai clienti.",
    upload_new_image: "Carica Nuova Immagine",
    drag_or_click: "Trascina o clicca per caricare",
    select_image: "Seleziona Immagine",
    remove: "Rimuovi",
    upload_image: "Carica Immagine",
    uploading: "Caricamento...",
    uploaded_images: "Immagini Caricate",
    uploaded_on: "Caricata:",
    no_images: "Nessuna immagine",
    no_images_hint: "Carica la prima immagine per iniziare.",
    confirm_delete_image: "Sei sicuro di voler eliminare questa immagine?",
    msg_select_image_file: "Seleziona un file immagine (JPG, PNG, WEBP)",
    msg_image_too_large: "L'immagine deve essere inferiore a 5MB",
    msg_select_first: "Seleziona prima un'immagine",
    msg_upload_success: "Immagine caricata con successo!",
    msg_upload_failed: "Caricamento non riuscito",
    msg_delete_success: "Immagine eliminata con successo!",
    msg_delete_failed: "Eliminazione non riuscita",
    msg_fetch_failed: "Errore nel recupero delle immagini",

    settings_title: "Impostazioni",
    settings_api_base_url: "URL base API",
    settings_locale: "Lingua",

    not_found_title: "Pagina Non Trovata",
    not_found_body: "La pagina che cerchi non esiste.",
    back_to_dashboard: "Torna al Pannello",
};

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("en", Locale::En)]
    #[case("EN", Locale::En)]
    #[case(" english ", Locale::En)]
    #[case("it", Locale::It)]
    #[case("Italiano", Locale::It)]
    fn test_locale_parsing(#[case] input: &str, #[case] expected: Locale) {
        assert_eq!(input.parse::<Locale>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_locale_rejected() {
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_tables_differ_only_in_text() {
        assert_eq!(Locale::En.strings().app_title, Locale::It.strings().app_title);
        assert_ne!(Locale::En.strings().nav_menu, Locale::It.strings().nav_menu);
        assert_eq!(Locale::It.strings().msg_upload_success, "Immagine caricata con successo!");
    }

    #[test]
    fn test_locale_serde_codes() {
        for locale in Locale::ALL {
            let json = serde_json::to_string(&locale).unwrap();
            assert_eq!(json, format!("\"{}\"", locale.code()));
        }
    }
}
