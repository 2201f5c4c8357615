//! Word pools backing the fake value generators.

pub const FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Carmen", "Diego", "Elena", "Frank", "Grace", "Hassan", "Ingrid", "Jamal",
    "Karen", "Liam", "Maria", "Noah", "Olga", "Pedro", "Quinn", "Rosa", "Samuel", "Tara",
    "Umar", "Vera", "Wesley", "Ximena", "Yusuf", "Zoe", "Aaron", "Bianca", "Caleb", "Daphne",
    "Emil", "Farah", "Gustav", "Hana", "Ivan", "Jade", "Kofi", "Lena", "Marcus", "Nadia",
    "Oscar", "Priya", "Ruben", "Sofia", "Tomas", "Ursula", "Victor", "Wendy",
];

pub const LAST_NAMES: &[&str] = &[
    "Anderson", "Baptiste", "Chen", "Dubois", "Eriksen", "Fernandez", "Garcia", "Hoffman",
    "Iwata", "Johnson", "Kowalski", "Lindgren", "Martinez", "Nakamura", "Okafor", "Petrov",
    "Quintero", "Rossi", "Schmidt", "Takahashi", "Umarov", "Vargas", "Weber", "Xu",
    "Yamada", "Zhang", "Abbott", "Becker", "Calloway", "Dawson", "Ellis", "Fleming",
    "Grant", "Hayes", "Ibrahim", "Jensen", "Keller", "Larson", "Mercer", "Novak",
    "Osborne", "Pearce", "Reyes", "Sandoval", "Turner", "Underwood", "Voss", "Whitaker",
];

pub const STREET_NAMES: &[&str] = &[
    "Maple", "Birchwood", "Cedar", "Elm", "Franklin", "Highland", "Jefferson", "Lakeview",
    "Madison", "Oakridge", "Park", "Riverside", "Sunset", "Willow", "Chestnut", "Dogwood",
];

pub const STREET_SUFFIXES: &[&str] = &["St", "Ave", "Blvd", "Dr", "Ln", "Rd", "Way", "Ct"];

pub const CITIES: &[&str] = &[
    "Springfield", "Riverton", "Fairview", "Greenville", "Bristol", "Clinton", "Georgetown",
    "Salem", "Madison", "Oakland", "Ashland", "Burlington", "Clayton", "Dover", "Milton",
    "Newport",
];

pub const STATES: &[&str] = &[
    "AL", "CA", "CO", "FL", "GA", "IL", "MA", "MI", "NC", "NJ", "NY", "OH", "OR", "PA", "TX",
    "WA",
];

pub const PLAN_TERMS: &[&str] = &[
    "monthly",
    "annual",
    "biennial",
    "payment in advance",
    "autorenew",
    "trial",
];

pub const DOMAIN_WORDS: &[&str] = &[
    "meadowbrook", "northwind", "bluepeak", "silverline", "oakfield", "brightside", "stonegate",
    "clearwater", "ironwood", "sunridge", "copperleaf", "fairwind", "lakecrest", "pinehurst",
    "redstone", "westgate",
];

pub const TLDS: &[&str] = &["com", "net", "org", "io", "biz", "info"];

pub const URL_PATHS: &[&str] = &[
    "index", "products", "catalog", "search", "account", "checkout", "support", "about",
    "pricing", "downloads", "blog", "contact",
];

pub const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_4) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15",
    "Mozilla/5.0 (X11; Linux x86_64; rv:125.0) Gecko/20100101 Firefox/125.0",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:124.0) Gecko/20100101 Firefox/124.0",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/15E148",
    "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Mobile Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36 Edg/123.0.2420.81",
    "Mozilla/4.0 (compatible; MSIE 7.0; Windows NT 6.0)",
    "Opera/9.80 (Windows NT 6.1; WOW64) Presto/2.12.388 Version/12.18",
    "curl/8.5.0",
    "Wget/1.21.4",
    "python-requests/2.31.0",
];
