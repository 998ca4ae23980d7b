//! Noun inflection for camel-case identifiers.
//!
//! Only the last word of an identifier is singularized: `VirtualMachines` becomes
//! `VirtualMachine`, `Policy` stays `Policy`. Word boundaries are capitalized runs
//! (`[A-Z][a-z0-9]*`); anything outside a run is dropped when the identifier is rejoined.
//!
//! Words are matched, in order, against irregular nouns, uncountable nouns and then an ordered
//! list of suffix rules. These are the English inflection rules of the `pluralize` family of
//! libraries, so `Metadata` becomes `Metadatum`, `Bases` becomes `Base`, while `Analytics`,
//! `Media` and `Campus` are left alone.

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

/// A capitalized word run.
static WORD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z][a-z0-9]*").expect("word run regex is valid"));

/// Irregular forms, as (singular, plural). For a plural listed more than once, the last
/// entry wins.
static IRREGULAR_NOUNS: &[(&str, &str)] = &[
    // Pronouns
    ("i", "we"),
    ("me", "us"),
    ("he", "they"),
    ("she", "they"),
    ("them", "them"),
    ("myself", "ourselves"),
    ("yourself", "yourselves"),
    ("itself", "themselves"),
    ("herself", "themselves"),
    ("himself", "themselves"),
    ("themself", "themselves"),
    ("is", "are"),
    ("was", "were"),
    ("has", "have"),
    ("this", "these"),
    ("that", "those"),
    ("my", "our"),
    ("its", "their"),
    ("his", "their"),
    ("her", "their"),
    // Words ending in a consonant and `o`
    ("echo", "echoes"),
    ("dingo", "dingoes"),
    ("volcano", "volcanoes"),
    ("tornado", "tornadoes"),
    ("torpedo", "torpedoes"),
    // Ends with `us`
    ("genus", "genera"),
    ("viscus", "viscera"),
    // Ends with `ma`
    ("stigma", "stigmata"),
    ("stoma", "stomata"),
    ("dogma", "dogmata"),
    ("lemma", "lemmata"),
    ("schema", "schemata"),
    ("anathema", "anathemata"),
    // Other
    ("ox", "oxen"),
    ("axe", "axes"),
    ("die", "dice"),
    ("yes", "yeses"),
    ("foot", "feet"),
    ("eave", "eaves"),
    ("goose", "geese"),
    ("tooth", "teeth"),
    ("quiz", "quizzes"),
    ("human", "humans"),
    ("proof", "proofs"),
    ("carve", "carves"),
    ("valve", "valves"),
    ("looey", "looies"),
    ("thief", "thieves"),
    ("groove", "grooves"),
    ("pickaxe", "pickaxes"),
    ("passerby", "passersby"),
    ("canvas", "canvases"),
];

/// Nouns without a distinct singular form.
static UNCOUNTABLE_NOUNS: &[&str] = &[
    "adulthood", "advice", "agenda", "aid", "aircraft", "alcohol", "ammo", "analytics", "anime",
    "athletics", "audio", "bison", "blood", "bream", "buffalo", "butter", "carp", "cash",
    "chassis", "chess", "clothing", "cod", "commerce", "cooperation", "corps", "debris",
    "diabetes", "digestion", "elk", "energy", "equipment", "excretion", "expertise", "firmware",
    "flounder", "fun", "gallows", "garbage", "graffiti", "hardware", "headquarters", "health",
    "herpes", "highjinks", "homework", "housework", "information", "jeans", "justice", "kudos",
    "labour", "literature", "machinery", "mackerel", "mail", "media", "mews", "moose", "music",
    "mud", "manga", "news", "only", "personnel", "pike", "plankton", "pliers", "police",
    "pollution", "premises", "rain", "research", "rice", "salmon", "scissors", "series",
    "sewage", "shambles", "shrimp", "software", "staff", "swine", "tennis", "traffic",
    "transportation", "trout", "tuna", "wealth", "welfare", "whiting", "wildebeest", "wildlife",
    "you",
];

/// Uncountable noun endings.
static UNCOUNTABLE_ENDINGS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(pok[eé]mon|[^aeiou]ese|deer|fish|measles|o[iu]s|pox|sheep)$")
        .expect("uncountable endings regex is valid")
});

/// Singularization rules, as (pattern, replacement). The first matching rule applies.
static SINGULAR_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"men$", "man"),
        (r"(eau)x?$", "${1}"),
        (r"(child)ren$", "${1}"),
        (r"(pe)(rson|ople)$", "${1}rson"),
        (r"(matr|append)ices$", "${1}ix"),
        (r"(cod|mur|sil|vert|ind)ices$", "${1}ex"),
        (r"(alumn|alg|vertebr)(?:a|ae)$", "${1}a"),
        (
            r"(apheli|hyperbat|periheli|asyndet|noumen|phenomen|criteri|organ|prolegomen|hedr|automat)(?:a|on)$",
            "${1}on",
        ),
        (
            r"(agend|addend|millenni|dat|extrem|bacteri|desiderat|strat|candelabr|errat|ov|symposi|curricul|quor)a$",
            "${1}um",
        ),
        (
            r"(alumn|syllab|vir|radi|nucle|fung|cact|stimul|termin|bacill|foc|uter|loc|strat)(?:us|i)$",
            "${1}us",
        ),
        (r"(test)(?:is|es)$", "${1}is"),
        (r"(movie|twelve|abuse|e[mn]u)s$", "${1}"),
        (
            r"(analy|diagno|parenthe|progno|synop|the|empha|cri|ne)(?:sis|ses)$",
            "${1}sis",
        ),
        (
            r"(x|ch|ss|sh|zz|tto|go|cho|alias|[^aou]us|t[lm]as|gas|(?:her|at|gr)o|[aeiou]ris)(?:es)?$",
            "${1}",
        ),
        (r"(seraph|cherub)im$", "${1}"),
        (r"\b((?:tit)?m|l)ice$", "${1}ouse"),
        (r"\b(mon|smil)ies$", "${1}ey"),
        (
            r"\b(l|(?:neck|cross|hog|aun)?t|coll|faer|food|gen|goon|group|hipp|junk|vegg|(?:pork)?p|charl|calor|cut)ies$",
            "${1}ie",
        ),
        (
            r"(dg|ss|ois|lk|ok|wn|mb|th|ch|ec|oal|is|ck|ix|sser|ts|wb)ies$",
            "${1}ie",
        ),
        (r"ies$", "y"),
        (r"(ar|(?:wo|[ae])l|[eo][ao])ves$", "${1}f"),
        (
            r"(wi|kni|(?:after|half|high|low|mid|non|night|[^\w]|^)li)ves$",
            "${1}fe",
        ),
        (r"(ss)$", "${1}"),
        (r"s$", ""),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (
            Regex::new(pattern).expect("singular rule regex is valid"),
            replacement,
        )
    })
    .collect()
});

/// Splits an identifier into its capitalized word runs.
pub fn words(identifier: &str) -> Vec<&str> {
    WORD_RUN
        .find_iter(identifier)
        .map(|m| m.as_str())
        .collect()
}

/// Upper-cases the first letter of `word`, leaving the rest unchanged.
pub fn capitalize(word: &str) -> Cow<'_, str> {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if !first.is_uppercase() => {
            Cow::Owned(first.to_uppercase().chain(chars).collect())
        }
        _ => Cow::Borrowed(word),
    }
}

/// Singularizes the last word of a camel-case identifier.
///
/// Returns `None` when the identifier has no capitalized word run.
///
/// ```
/// use swagcli_naming::inflect::singularize;
///
/// assert_eq!(singularize("VirtualMachines").as_deref(), Some("VirtualMachine"));
/// assert_eq!(singularize("WorkspaceMetadata").as_deref(), Some("WorkspaceMetadatum"));
/// assert_eq!(singularize("virtualMachines").as_deref(), Some("Machine"));
/// assert_eq!(singularize("workspaces"), None);
/// ```
pub fn singularize(identifier: &str) -> Option<String> {
    let words = words(identifier);
    let (last, init) = words.split_last()?;

    let singular = singular_word(&last.to_lowercase());
    let mut joined = init.concat();
    joined.push_str(&capitalize(&singular));
    Some(joined)
}

/// Singular form of a lowercase word.
fn singular_word(word: &str) -> String {
    if IRREGULAR_NOUNS.iter().any(|(singular, _)| *singular == word) {
        return word.to_string();
    }
    if let Some((singular, _)) = IRREGULAR_NOUNS.iter().rev().find(|(_, plural)| *plural == word) {
        return singular.to_string();
    }
    if word.is_empty() || UNCOUNTABLE_NOUNS.contains(&word) || UNCOUNTABLE_ENDINGS.is_match(word) {
        return word.to_string();
    }

    SINGULAR_RULES
        .iter()
        .find(|(rule, _)| rule.is_match(word))
        .map(|(rule, replacement)| rule.replace(word, *replacement).into_owned())
        .unwrap_or_else(|| word.to_string())
}
