//! The handful of localized strings the JSON views carry.
//!
//! Templates use `{n}` (a number), `{name}` or `{site}` placeholders.

use time::Month;

use super::Language;

#[derive(Debug)]
pub struct Messages {
    pub no_results: &'static str,
    pub no_bonuses: &'static str,
    pub no_licenses: &'static str,
    pub no_countries: &'static str,
    pub load_failed: &'static str,
    pub not_enough_to_compare: &'static str,
    pub not_specified: &'static str,
    pub not_available: &'static str,
    pub no_minimum: &'static str,

    pub mobile_app: &'static str,
    pub live_streaming: &'static str,
    pub cash_out: &'static str,
    pub live_betting: &'static str,

    pub min_rating: &'static str,
    pub min_wagering: &'static str,
    pub max_wagering: &'static str,
    pub min_deposit: &'static str,
    pub max_deposit: &'static str,
    pub exclusive: &'static str,
    pub casinos_selected: &'static str,
    pub trust_score: &'static str,
    pub player_protection: &'static str,
    pub annual_fees: &'static str,
    pub application_process: &'static str,
    pub tier: &'static str,

    pub welcome: &'static str,
    pub no_deposit: &'static str,
    pub free_bets: &'static str,
    pub free_spins: &'static str,
    pub cashback: &'static str,

    pub legal: &'static str,
    pub partially_legal: &'static str,
    pub restricted: &'static str,

    pub casino_of_the_month: &'static str,
    pub featured_by: &'static str,
    pub months: [&'static str; 12],
}

impl Messages {
    pub fn month(&self, month: Month) -> &'static str {
        self.months[month as usize - 1]
    }
}

/// Fill a `{n}` template.
pub fn fill(template: &str, n: impl ToString) -> String {
    template.replace("{n}", &n.to_string())
}

pub fn for_language(language: Language) -> &'static Messages {
    match language {
        Language::En => &EN,
        Language::Es => &ES,
        Language::Fr => &FR,
        Language::De => &DE,
    }
}

static EN: Messages = Messages {
    no_results: "No results found. Try different filters.",
    no_bonuses: "No bonuses found. Try different filters.",
    no_licenses: "No licenses match the selected filters.",
    no_countries: "No countries match your search.",
    load_failed: "This section could not be loaded.",
    not_enough_to_compare: "At least two entries are needed to compare.",
    not_specified: "Not specified",
    not_available: "N/A",
    no_minimum: "No minimum",
    mobile_app: "Mobile App",
    live_streaming: "Live Streaming",
    cash_out: "Cash Out",
    live_betting: "Live Betting",
    min_rating: "Rating: {n}+",
    min_wagering: "Min wagering: {n}x",
    max_wagering: "Max wagering: {n}x",
    min_deposit: "Min deposit: {n}€",
    max_deposit: "Max deposit: {n}€",
    exclusive: "Exclusive bonuses",
    casinos_selected: "Casinos: {n} selected",
    trust_score: "Trust Score: {n}+",
    player_protection: "Player Protection",
    annual_fees: "Annual Fees Info",
    application_process: "Application Process",
    tier: "Tier: {n}",
    welcome: "Welcome Bonus",
    no_deposit: "No Deposit",
    free_bets: "Free Bets",
    free_spins: "Free Spins",
    cashback: "Cashback",
    legal: "Legal",
    partially_legal: "Partially legal",
    restricted: "Restricted",
    casino_of_the_month: "Casino of the Month",
    featured_by: "Featured by {site}",
    months: [
        "January", "February", "March", "April", "May", "June", "July", "August",
        "September", "October", "November", "December",
    ],
};

static ES: Messages = Messages {
    no_results: "No se encontraron resultados. Prueba con otros filtros.",
    no_bonuses: "No se encontraron bonos. Prueba con otros filtros.",
    no_licenses: "Ninguna licencia coincide con los filtros seleccionados.",
    no_countries: "Ningún país coincide con tu búsqueda.",
    load_failed: "No se pudo cargar esta sección.",
    not_enough_to_compare: "Se necesitan al menos dos entradas para comparar.",
    not_specified: "No especificado",
    not_available: "N/D",
    no_minimum: "Sin mínimo",
    mobile_app: "App Móvil",
    live_streaming: "Streaming en Vivo",
    cash_out: "Cash Out",
    live_betting: "Apuestas en Vivo",
    min_rating: "Valoración: {n}+",
    min_wagering: "Requisito mínimo: {n}x",
    max_wagering: "Requisito máximo: {n}x",
    min_deposit: "Depósito mínimo: {n}€",
    max_deposit: "Depósito máximo: {n}€",
    exclusive: "Bonos Exclusivos",
    casinos_selected: "Casinos: {n} seleccionados",
    trust_score: "Puntuación de confianza: {n}+",
    player_protection: "Protección al jugador",
    annual_fees: "Tarifas anuales",
    application_process: "Proceso de solicitud",
    tier: "Nivel: {n}",
    welcome: "Bono de Bienvenida",
    no_deposit: "Sin Depósito",
    free_bets: "Apuestas Gratis",
    free_spins: "Giros Gratis",
    cashback: "Devolución",
    legal: "Legal",
    partially_legal: "Parcialmente legal",
    restricted: "Restringido",
    casino_of_the_month: "Casino del Mes",
    featured_by: "Destacado por {site}",
    months: [
        "Enero", "Febrero", "Marzo", "Abril", "Mayo", "Junio", "Julio", "Agosto",
        "Septiembre", "Octubre", "Noviembre", "Diciembre",
    ],
};

static FR: Messages = Messages {
    no_results: "Aucun résultat. Essayez d'autres filtres.",
    no_bonuses: "Aucun bonus trouvé. Essayez d'autres filtres.",
    no_licenses: "Aucune licence ne correspond aux filtres sélectionnés.",
    no_countries: "Aucun pays ne correspond à votre recherche.",
    load_failed: "Cette section n'a pas pu être chargée.",
    not_enough_to_compare: "Il faut au moins deux entrées pour comparer.",
    not_specified: "Non spécifié",
    not_available: "N/D",
    no_minimum: "Aucun minimum",
    mobile_app: "Application Mobile",
    live_streaming: "Streaming en Direct",
    cash_out: "Cash Out",
    live_betting: "Paris en Direct",
    min_rating: "Note : {n}+",
    min_wagering: "Mise minimale : {n}x",
    max_wagering: "Mise maximale : {n}x",
    min_deposit: "Dépôt minimum : {n}€",
    max_deposit: "Dépôt maximum : {n}€",
    exclusive: "Bonus exclusifs",
    casinos_selected: "Casinos : {n} sélectionnés",
    trust_score: "Score de confiance : {n}+",
    player_protection: "Protection des joueurs",
    annual_fees: "Frais annuels",
    application_process: "Procédure de demande",
    tier: "Niveau : {n}",
    welcome: "Bonus de Bienvenue",
    no_deposit: "Sans Dépôt",
    free_bets: "Paris Gratuits",
    free_spins: "Tours Gratuits",
    cashback: "Remboursement",
    legal: "Légal",
    partially_legal: "Partiellement légal",
    restricted: "Restreint",
    casino_of_the_month: "Casino du Mois",
    featured_by: "Mis en avant par {site}",
    months: [
        "Janvier", "Février", "Mars", "Avril", "Mai", "Juin", "Juillet", "Août",
        "Septembre", "Octobre", "Novembre", "Décembre",
    ],
};

static DE: Messages = Messages {
    no_results: "Keine Ergebnisse gefunden. Versuchen Sie andere Filter.",
    no_bonuses: "Keine Boni gefunden. Versuchen Sie andere Filter.",
    no_licenses: "Keine Lizenz entspricht den ausgewählten Filtern.",
    no_countries: "Kein Land entspricht Ihrer Suche.",
    load_failed: "Dieser Bereich konnte nicht geladen werden.",
    not_enough_to_compare: "Zum Vergleichen werden mindestens zwei Einträge benötigt.",
    not_specified: "Nicht angegeben",
    not_available: "k. A.",
    no_minimum: "Kein Minimum",
    mobile_app: "Mobile App",
    live_streaming: "Live-Streaming",
    cash_out: "Cash Out",
    live_betting: "Live-Wetten",
    min_rating: "Bewertung: {n}+",
    min_wagering: "Min. Umsatz: {n}x",
    max_wagering: "Max. Umsatz: {n}x",
    min_deposit: "Min. Einzahlung: {n}€",
    max_deposit: "Max. Einzahlung: {n}€",
    exclusive: "Exklusive Boni",
    casinos_selected: "Casinos: {n} ausgewählt",
    trust_score: "Vertrauenswert: {n}+",
    player_protection: "Spielerschutz",
    annual_fees: "Jahresgebühren",
    application_process: "Antragsverfahren",
    tier: "Stufe: {n}",
    welcome: "Willkommensbonus",
    no_deposit: "Ohne Einzahlung",
    free_bets: "Gratiswetten",
    free_spins: "Freispiele",
    cashback: "Cashback",
    legal: "Legal",
    partially_legal: "Teilweise legal",
    restricted: "Eingeschränkt",
    casino_of_the_month: "Casino des Monats",
    featured_by: "Empfohlen von {site}",
    months: [
        "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August",
        "September", "Oktober", "November", "Dezember",
    ],
};
