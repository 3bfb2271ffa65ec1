//! Word pools the fixture generator draws from.
//!
//! Every pool is non-empty; the generator indexes into them directly.

pub const FIRST_NAMES: &[&str] = &[
    "Aaron", "Abigail", "Adam", "Adele", "Adrian", "Agnes", "Aidan", "Alan", "Albert", "Alice",
    "Alma", "Amelia", "Amir", "Andrea", "Andrew", "Angela", "Anna", "Anton", "Arthur", "Audrey",
    "Beatrice", "Benjamin", "Bernard", "Bianca", "Blake", "Brenda", "Bruno", "Caleb", "Camille",
    "Carla", "Carmen", "Cecilia", "Charles", "Chloe", "Claire", "Clara", "Colin", "Connor",
    "Daniel", "Daphne", "David", "Diana", "Dominic", "Doris", "Edgar", "Edith", "Edward", "Elena",
    "Eleanor", "Elias", "Elliot", "Emily", "Emma", "Eric", "Esther", "Ethan", "Eva", "Felix",
    "Fiona", "Frances", "Francis", "Gabriel", "Gemma", "George", "Gloria", "Grace", "Gregory",
    "Hannah", "Harvey", "Hazel", "Helen", "Henry", "Hugo", "Ian", "Ingrid", "Irene", "Iris",
    "Isaac", "Ivan", "Jack", "Jacob", "Jasmine", "Joan", "Jonah", "Joseph", "Julia", "Julian",
    "June", "Karen", "Keith", "Kevin", "Laura", "Leo", "Leon", "Lila", "Louis", "Lucas", "Lucy",
    "Luke", "Lydia", "Mabel", "Malcolm", "Marcus", "Margaret", "Maria", "Martin", "Maya", "Miles",
    "Miriam", "Nadia", "Nathan", "Naomi", "Nina", "Noah", "Nora", "Oliver", "Olivia", "Omar",
    "Oscar", "Owen", "Patrick", "Paul", "Penelope", "Peter", "Philip", "Quentin", "Rachel",
    "Ralph", "Rebecca", "Robert", "Rosa", "Rose", "Ruth", "Samuel", "Sarah", "Sean", "Simon",
    "Sophie", "Stella", "Theo", "Thomas", "Tobias", "Ursula", "Valerie", "Vera", "Victor",
    "Vincent", "Walter", "Wendy", "William", "Yara", "Yusuf", "Zoe",
];

pub const LAST_NAMES: &[&str] = &[
    "Abbott", "Acosta", "Aguilar", "Alvarez", "Andersen", "Arnold", "Atkins", "Bailey", "Baker",
    "Banks", "Barnes", "Barrett", "Becker", "Bell", "Bennett", "Bishop", "Blair", "Bowen", "Boyd",
    "Bradley", "Brennan", "Brooks", "Burke", "Burton", "Byrne", "Caldwell", "Campbell", "Carter",
    "Castillo", "Chambers", "Chapman", "Chen", "Clarke", "Cole", "Coleman", "Conway", "Cooper",
    "Crawford", "Cross", "Cruz", "Dalton", "Daniels", "Davies", "Dawson", "Delgado", "Dixon",
    "Doyle", "Dubois", "Duncan", "Dunn", "Elliott", "Ellis", "Erikson", "Evans", "Farrell",
    "Ferguson", "Fischer", "Fitzgerald", "Fleming", "Fletcher", "Flores", "Foster", "Fowler",
    "Fraser", "Fuller", "Garnier", "Garza", "Gibson", "Gilbert", "Gordon", "Graham", "Grant",
    "Greene", "Griffin", "Hale", "Hamilton", "Hansen", "Harper", "Hart", "Hayes", "Henderson",
    "Hoffman", "Holland", "Holmes", "Hopkins", "Howard", "Hughes", "Hunt", "Ibarra", "Jacobs",
    "Jensen", "Jordan", "Kane", "Keller", "Kelly", "Kennedy", "Klein", "Knight", "Lambert", "Lane",
    "Larsen", "Lawson", "Lefevre", "Lindqvist", "Lloyd", "Lowe", "Lynch", "Mack", "Marsh",
    "Marshall", "Mason", "Mercier", "Meyer", "Miles", "Mitchell", "Moreau", "Morales", "Moss",
    "Murphy", "Nash", "Newman", "Nguyen", "Nolan", "Novak", "Obrien", "Olsen", "Ortega", "Owens",
    "Palmer", "Parker", "Patel", "Pearson", "Perrin", "Peters", "Porter", "Powell", "Quinn",
    "Ramirez", "Reed", "Reyes", "Reynolds", "Richter", "Riley", "Roberts", "Rowe", "Russell",
    "Ryan", "Santos", "Schmidt", "Schneider", "Shaw", "Silva", "Sinclair", "Spencer", "Steele",
    "Stone", "Sullivan", "Sutton", "Tanaka", "Thornton", "Tucker", "Turner", "Vance", "Vargas",
    "Vidal", "Wagner", "Wallace", "Walsh", "Warren", "Watts", "Weber", "Wells", "Whitaker",
    "Wolfe", "Wong", "Wright", "Young", "Zimmerman",
];

/// Middle word of "<surname> <sector> <suffix>" company names.
pub const COMPANY_SECTORS: &[&str] = &[
    "Analytics",
    "Capital",
    "Consulting",
    "Design",
    "Dynamics",
    "Energy",
    "Foods",
    "Health",
    "Industries",
    "Logistics",
    "Media",
    "Manufacturing",
    "Networks",
    "Realty",
    "Software",
    "Supply",
    "Technologies",
    "Textiles",
    "Trading",
    "Ventures",
];

pub const COMPANY_SUFFIXES: &[&str] = &[
    "Inc",
    "LLC",
    "Group",
    "Partners",
    "Holdings",
    "Labs",
    "Solutions",
    "Systems",
    "Co",
    "and Sons",
];

/// Job titles, used as a free-form industry descriptor.
pub const INDUSTRIES: &[&str] = &[
    "Accountant",
    "Architect",
    "Biomedical engineer",
    "Brand manager",
    "Civil engineer",
    "Data analyst",
    "Event planner",
    "Financial advisor",
    "Graphic designer",
    "Hotel manager",
    "Insurance broker",
    "Interior designer",
    "Logistics coordinator",
    "Marketing director",
    "Mechanical engineer",
    "Pharmacist",
    "Real estate agent",
    "Software developer",
    "Supply chain manager",
    "Travel consultant",
];

pub const STREET_NAMES: &[&str] = &[
    "Oak", "Maple", "Cedar", "Elm", "Pine", "Willow", "Birch", "Chestnut", "Lake", "Hill",
    "Park", "River", "Sunset", "Highland", "Meadow", "Harbor",
];

pub const STREET_TYPES: &[&str] = &["Street", "Avenue", "Road", "Lane", "Boulevard", "Drive"];

pub const CITIES: &[&str] = &[
    "Springfield",
    "Riverside",
    "Fairview",
    "Franklin",
    "Georgetown",
    "Madison",
    "Clinton",
    "Arlington",
    "Salem",
    "Ashland",
    "Greenville",
    "Bristol",
];

pub const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net"];

pub const WEB_TLDS: &[&str] = &["com", "net", "org", "io", "biz"];

/// Call-note sentences; each is well under the interaction content limit.
pub const NOTE_SENTENCES: &[&str] = &[
    "Discussed current pricing.",
    "Asked for a follow-up next week.",
    "Interested in the premium plan.",
    "Budget approval is pending.",
    "Wants a demo for the team.",
    "Raised concerns about onboarding.",
    "Comparing us with a competitor.",
    "Requested a written proposal.",
    "Decision maker was unavailable.",
    "Happy with the trial so far.",
    "Needs integration details.",
    "Timeline pushed to next quarter.",
];
