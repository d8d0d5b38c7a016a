/// Maximum number of words handed to a lemmatizer at once.
pub const DEFAULT_SLICE_LENGTH: usize = 512;

pub const EXTRACTED_DATA_DIRECTORY: &str = "ExtractedData";
pub const EXTRACTED_TEXTS_DIRECTORY: &str = "ExtractedTexts";
pub const EXTRACTED_TOKENS_DIRECTORY: &str = "ExtractedTokens";
pub const HEURISTIC_DATA_DIRECTORY: &str = "HeuristicData";

pub const KEYWORD_FREQUENCY_WORKBOOK: &str = "KeywordFrequency";
pub const KEYWORD_VALIDATION_WORKBOOK: &str = "KeywordValidation";
pub const STATISTICS_WORKBOOK: &str = "Statistics";
pub const CATEGORY_SUMMARIES_WORKBOOK: &str = "CategorySummaries";
pub const POOLED_OVERVIEW_WORKBOOK: &str = "PooledOverview";

pub const KEYWORD_LEDGER_FILE_NAME: &str = "keyword_ledger.csv";
pub const MANIFEST_FILE_NAME: &str = "_manifest.json";

pub const FREQUENCY_SHEET: &str = "frequency";
pub const VALIDATION_SHEET: &str = "validation";
pub const MEAN_SHEET: &str = "mean";
pub const STD_SHEET: &str = "std";
pub const STD_IN_PERCENT_SHEET: &str = "std_in_percent";

/// Column label of the pooled statistic appended to every category summary.
pub const POOLED_COLUMN: &str = "pooled";

/// Separates pages in imported plain-text extractions.
pub const PAGE_SEPARATOR: char = '\u{000C}';

// Subset of the NLTK German stop-word list
pub const STOP_WORDS: &[&str] = &[
    "aber", "alle", "allem", "allen", "aller", "alles", "als", "also", "am", "an", "ander",
    "andere", "anderem", "anderen", "anderer", "anderes", "auch", "auf", "aus", "bei", "bin",
    "bis", "bist", "da", "damit", "dann", "das", "dass", "dasselbe", "dazu", "dein", "deine",
    "dem", "den", "denn", "der", "derer", "des", "desselben", "dessen", "dich", "die", "dies",
    "diese", "dieselbe", "dieselben", "diesem", "diesen", "dieser", "dieses", "dir", "doch",
    "dort", "du", "durch", "ein", "eine", "einem", "einen", "einer", "eines", "einig",
    "einige", "einigem", "einigen", "einiger", "einiges", "einmal", "er", "es", "etwas",
    "euch", "euer", "eure", "für", "gegen", "gewesen", "hab", "habe", "haben", "hat",
    "hatte", "hatten", "hier", "hin", "hinter", "ich", "ihm", "ihn", "ihnen", "ihr", "ihre",
    "im", "in", "indem", "ins", "ist", "jede", "jedem", "jeden", "jeder", "jedes", "jene",
    "jenem", "jenen", "jener", "jenes", "jetzt", "kann", "kein", "keine", "keinem",
    "keinen", "keiner", "keines", "können", "könnte", "machen", "man", "manche", "manchem",
    "manchen", "mancher", "manches", "mein", "meine", "mich", "mir", "mit", "muss",
    "musste", "nach", "nicht", "nichts", "noch", "nun", "nur", "ob", "oder", "ohne", "sehr",
    "sein", "seine", "sich", "sie", "sind", "so", "solche", "soll", "sollte", "sondern",
    "sonst", "über", "um", "und", "uns", "unser", "unter", "viel", "vom", "von", "vor",
    "während", "war", "waren", "warst", "was", "weg", "weil", "weiter", "welche", "wenn",
    "werde", "werden", "wie", "wieder", "will", "wir", "wird", "wirst", "wo", "wollen",
    "wollte", "würde", "würden", "zu", "zum", "zur", "zwar", "zwischen",
];
