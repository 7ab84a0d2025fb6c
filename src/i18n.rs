// ---------------------------------------------------------------------------
// Bilingual display labels (English / French)
// ---------------------------------------------------------------------------

/// Active display language.  Affects labels only, never data selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Fr,
}

/// French labels for the StatCan summary-level categories.  Categories with
/// no entry fall back to their English label.
const CATEGORY_FR: &[(&str, &str)] = &[
    ("Food expenditures", "Dépenses alimentaires"),
    ("Food purchased from stores", "Aliments achetés en magasin"),
    ("Bakery products", "Produits de boulangerie"),
    (
        "Cereal grains and cereal products",
        "Céréales et produits céréaliers",
    ),
    (
        "Fruit, fruit preparations and nuts",
        "Fruits, préparations de fruits et noix",
    ),
    (
        "Vegetables and vegetable preparations",
        "Légumes et préparations de légumes",
    ),
    ("Dairy products and eggs", "Produits laitiers et œufs"),
    ("Meat", "Viande"),
    ("Fish and seafood", "Poisson et fruits de mer"),
    (
        "Non-alcoholic beverages and other food products",
        "Boissons non alcoolisées et autres produits alimentaires",
    ),
    (
        "Food purchased from restaurants",
        "Aliments achetés au restaurant",
    ),
    ("Restaurant meals", "Repas au restaurant"),
    (
        "Restaurant snacks and beverages",
        "Collations et boissons au restaurant",
    ),
];

impl Language {
    /// Display label for a category under this language.
    pub fn display_category<'a>(&self, category: &'a str) -> &'a str {
        match self {
            Language::En => category,
            Language::Fr => CATEGORY_FR
                .iter()
                .find(|(en, _)| *en == category)
                .map(|(_, fr)| *fr)
                .unwrap_or(category),
        }
    }
}

// ---------------------------------------------------------------------------
// Fixed UI strings
// ---------------------------------------------------------------------------

/// The dashboard's fixed strings for one language.
pub struct UiText {
    pub line_chart_title: &'static str,
    pub category_label: &'static str,
    pub pie_chart_title: &'static str,
    pub year_label: &'static str,
    pub site_description: &'static str,
    /// Placeholder shown instead of an empty pie chart; the selected year is
    /// appended.
    pub no_data: &'static str,
}

const TEXT_EN: UiText = UiText {
    line_chart_title: "Spending Over Years",
    category_label: "Select category",
    pie_chart_title: "Spending Breakdown by Category",
    year_label: "Select year",
    site_description: "This interactive dashboard presents Canadian household food \
        expenditure data, allowing you to explore spending trends over time and \
        compare spending across categories. All values are in Canadian Dollars (CAD).",
    no_data: "No data available for",
};

const TEXT_FR: UiText = UiText {
    line_chart_title: "Dépenses au fil des années",
    category_label: "Sélectionnez la catégorie",
    pie_chart_title: "Répartition des dépenses par catégorie",
    year_label: "Sélectionnez l'année",
    site_description: "Ce tableau de bord interactif présente les données sur les \
        dépenses alimentaires des ménages canadiens, vous permettant d'explorer les \
        tendances de dépenses au fil du temps et de comparer les dépenses entre \
        catégories. Toutes les valeurs sont en dollars canadiens (CAD).",
    no_data: "Aucune donnée disponible pour",
};

/// Fixed UI strings for the given language.
pub fn text(language: Language) -> &'static UiText {
    match language {
        Language::En => &TEXT_EN,
        Language::Fr => &TEXT_FR,
    }
}
