//! Closed-class and high-frequency word lexicon for the rule tagger.
//!
//! Keys are lowercase surface forms; values are Penn Treebank tags. Words
//! missing here are tagged by suffix heuristics in [`super::rules`].

use std::collections::HashMap;
use std::sync::LazyLock;

/// Surface form → tag.
pub static LEXICON: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    let mut add = |tag: &'static str, words: &[&'static str]| {
        for w in words {
            map.insert(*w, tag);
        }
    };

    add(
        "DT",
        &[
            "the", "a", "an", "this", "that", "these", "those", "every", "each", "some", "any",
            "no", "all", "both", "another", "either", "neither", "half",
        ],
    );
    add(
        "IN",
        &[
            "of", "in", "on", "at", "by", "for", "with", "from", "about", "into", "through",
            "during", "before", "after", "above", "below", "between", "under", "over", "since",
            "without", "within", "among", "against", "upon", "because", "although", "though",
            "while", "if", "whether", "than", "as", "like", "per", "via", "toward", "towards",
            "across", "behind", "beyond", "despite", "unless", "until", "around", "near", "off",
            "onto", "throughout", "whereas", "beside", "besides", "along", "amid",
        ],
    );
    add("TO", &["to"]);
    add("CC", &["and", "or", "but", "nor", "&", "plus"]);
    add(
        "PRP",
        &[
            "i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them", "myself",
            "yourself", "himself", "herself", "itself", "ourselves", "yourselves", "themselves",
        ],
    );
    add("PRP$", &["my", "your", "his", "her", "its", "our", "their"]);
    add("WP", &["who", "whom", "what", "whoever", "whatever"]);
    add("WP$", &["whose"]);
    add("WDT", &["which", "whichever"]);
    add("WRB", &["when", "where", "why", "how", "whenever", "wherever"]);
    add(
        "MD",
        &[
            "can", "could", "may", "might", "must", "shall", "should", "will", "would", "ought",
            "ca", "wo", "'ll", "'d",
        ],
    );
    add("POS", &["'s", "'"]);
    add("CD", &["one", "two", "three", "four", "five", "ten", "hundred", "thousand"]);
    add("UH", &["oh", "yes", "hello", "ok", "okay", "wow"]);

    // Auxiliaries and their clitics.
    add("VB", &["be", "have", "do"]);
    add("VBZ", &["is", "has", "does"]);
    add("VBP", &["are", "am", "'re", "'ve", "'m"]);
    add("VBD", &["was", "were", "had", "did"]);
    add("VBN", &["been", "done"]);
    add("VBG", &["being", "having", "doing"]);

    add(
        "RB",
        &[
            "not", "n't", "very", "also", "too", "often", "never", "always", "just", "only",
            "still", "even", "already", "soon", "here", "there", "now", "then", "again",
            "perhaps", "quite", "rather", "almost", "ever", "however", "thus", "therefore",
            "moreover", "furthermore", "instead", "well", "so", "yet", "once", "twice", "away",
            "back", "together", "sometimes", "usually", "maybe", "indeed", "hence", "otherwise",
            "meanwhile", "nevertheless", "nonetheless", "elsewhere", "anyway", "ago", "far",
            "out", "up", "down",
        ],
    );
    add("RBR", &["more", "less", "better", "worse", "further", "later"]);
    add("RBS", &["most", "least", "best", "worst"]);

    add(
        "JJ",
        &[
            "good", "new", "first", "last", "long", "great", "little", "own", "other", "old",
            "right", "big", "high", "different", "small", "large", "next", "early", "young",
            "important", "few", "public", "bad", "same", "able", "many", "several", "such",
            "main", "clear", "full", "real", "whole", "certain", "free", "recent", "possible",
            "similar", "major", "significant", "specific", "legal", "consistent", "likely",
            "friendly", "lovely", "ugly", "elderly", "daily", "weekly", "yearly",
            "true", "wrong", "hard", "easy", "simple", "strong", "low", "short", "late", "open",
            "human", "local", "social", "national", "general", "private", "key",
            "tired", "excited", "interested", "worried", "pleased", "married", "concerned",
            "complex", "common", "various", "essential", "overall", "entire",
        ],
    );
    add("JJR", &["bigger", "smaller", "larger", "higher", "lower", "greater", "older", "younger"]);
    add("JJS", &["biggest", "smallest", "largest", "highest", "lowest", "greatest"]);

    add(
        "NN",
        &[
            "thing", "king", "ring", "spring", "string", "morning", "evening", "nothing",
            "something", "anything", "everything", "ceiling", "wing", "family", "supply",
            "reply", "july", "time", "people", "way", "year", "day", "man", "woman", "child",
            "world", "life", "hand", "part", "place", "case", "week", "company", "system",
            "program", "question", "government", "number", "night", "point", "home", "water",
            "room", "mother", "area", "money", "story", "fact", "month", "lot", "study", "book",
            "eye", "job", "word", "business", "issue", "side", "kind", "head", "house",
            "service", "friend", "father", "power", "hour", "game", "line", "end", "member",
            "law", "car", "city", "community", "name", "team", "minute", "idea", "kid", "body",
            "information", "face", "others", "level", "office", "door", "health", "person",
            "art", "war", "history", "party", "result", "reason", "research",
            "girl", "guy", "moment", "air", "teacher", "force", "education", "data", "process",
            "policy", "theory", "method", "evidence", "context", "structure", "source",
            "economy", "environment", "concept", "approach", "role", "sector", "section",
            "income", "percent", "principle", "formula", "function", "response", "definition",
            "authority", "contract", "factor", "export", "news", "analysis", "basis", "crisis",
            "thesis", "hypothesis", "status", "focus", "virus", "bus", "campus", "census",
        ],
    );
    add("NNS", &["children", "men", "women", "feet", "teeth", "mice", "criteria", "phenomena"]);

    // Base-form verbs. Suffix rules cannot see these.
    add(
        "VB",
        &[
            "go", "get", "make", "know", "think", "take", "see", "come", "want", "use", "find",
            "give", "tell", "work", "call", "try", "ask", "need", "feel", "become", "leave",
            "put", "mean", "keep", "let", "begin", "seem", "help", "show", "hear", "play", "run",
            "move", "live", "believe", "bring", "happen", "write", "provide", "sit", "stand",
            "lose", "pay", "meet", "include", "continue", "learn", "lead", "understand",
            "watch", "follow", "stop", "create", "speak", "spend", "grow", "walk", "win",
            "offer", "remember", "consider", "appear", "buy", "wait", "serve", "die", "send",
            "expect", "build", "stay", "fall", "cut", "reach", "kill", "remain", "suggest",
            "raise", "pass", "sell", "require", "decide", "pull", "analyze", "analyse",
            "identify", "indicate", "involve", "establish", "assess", "assume", "derive",
            "interpret", "occur", "vary", "constitute", "distribute", "estimate", "apply",
            "rely", "fly", "sing", "swing", "say", "look", "allow", "add", "explain", "describe",
            "produce", "eat", "drink", "sleep", "drive", "choose", "seek", "hold",
        ],
    );
    add(
        "VBZ",
        &["says", "goes", "gets", "makes", "knows", "seems", "takes", "comes", "gives"],
    );
    add(
        "VBD",
        &[
            "went", "got", "made", "knew", "thought", "took", "saw", "came", "gave", "told",
            "felt", "became", "left", "meant", "kept", "began", "heard", "ran", "brought",
            "wrote", "sat", "stood", "lost", "paid", "met", "led", "understood", "spoke", "spent",
            "grew", "won", "bought", "sent", "built", "fell", "sold", "said", "found", "held",
            "ate", "drank", "slept", "drove", "chose", "sought", "flew", "sang", "threw", "wore",
            "rose", "drew", "forgot", "taught", "caught", "fought",
        ],
    );
    add(
        "VBN",
        &[
            "gone", "seen", "known", "given", "taken", "written", "spoken", "broken", "chosen",
            "driven", "eaten", "fallen", "forgotten", "forgiven", "frozen", "gotten", "hidden",
            "ridden", "risen", "shaken", "shown", "stolen", "sworn", "torn", "thrown", "worn",
            "beaten", "bitten", "blown", "drawn", "flown", "grown", "withdrawn", "begun",
            "drunk", "sung", "swum",
        ],
    );

    map
});

/// Look up the lexicon tag for a lowercase word.
pub fn lookup(word: &str) -> Option<&'static str> {
    LEXICON.get(word).copied()
}

/// Forms of "be" and "have" that license a following past participle.
pub fn is_perfect_or_passive_auxiliary(word: &str) -> bool {
    matches!(
        word,
        "is" | "are" | "am" | "was" | "were" | "be" | "been" | "being" | "has" | "have"
            | "had" | "having" | "'s" | "'re" | "'ve" | "'m" | "get" | "gets" | "got"
    )
}

/// Forms of "be" that follow existential "there".
pub fn is_be_form(word: &str) -> bool {
    matches!(
        word,
        "is" | "are" | "was" | "were" | "be" | "been" | "'s" | "'re" | "seems" | "seem"
            | "appears" | "remains" | "exists" | "exist"
    )
}

/// Third-person singular subject pronouns.
pub fn is_third_person_singular(word: &str) -> bool {
    matches!(word, "he" | "she" | "it" | "who" | "which")
}

/// Subject pronouns that take a non-third-person present verb.
pub fn is_plural_subject(word: &str) -> bool {
    matches!(word, "i" | "you" | "we" | "they")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_class_lookups() {
        assert_eq!(lookup("the"), Some("DT"));
        assert_eq!(lookup("of"), Some("IN"));
        assert_eq!(lookup("should"), Some("MD"));
        assert_eq!(lookup("n't"), Some("RB"));
        assert_eq!(lookup("their"), Some("PRP$"));
    }

    #[test]
    fn irregular_forms() {
        assert_eq!(lookup("went"), Some("VBD"));
        assert_eq!(lookup("written"), Some("VBN"));
        assert_eq!(lookup("children"), Some("NNS"));
    }

    #[test]
    fn unknown_word() {
        assert_eq!(lookup("zebra"), None);
    }

    #[test]
    fn auxiliary_predicates() {
        assert!(is_perfect_or_passive_auxiliary("was"));
        assert!(!is_perfect_or_passive_auxiliary("walked"));
        assert!(is_be_form("are"));
        assert!(is_third_person_singular("she"));
        assert!(is_plural_subject("we"));
    }
}
