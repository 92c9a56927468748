use std::path::{Path, PathBuf};

/// Small corpus with five clearly separated emotions, four rows each.
pub const EMOTION_ROWS: &[(&str, &str)] = &[
    ("I am so happy today", "joy"),
    ("what a wonderful happy morning", "joy"),
    ("this makes me smile and laugh with delight", "joy"),
    ("feeling cheerful and happy with friends", "joy"),
    ("I feel so sad and lonely", "sadness"),
    ("tears keep falling on this sad grey day", "sadness"),
    ("I miss her and my heart feels empty", "sadness"),
    ("sad and heartbroken after the funeral", "sadness"),
    ("this traffic makes me furious and angry", "anger"),
    ("I am so angry at the broken promises", "anger"),
    ("stop yelling, I am absolutely furious", "anger"),
    ("angry rage boiling over the injustice", "anger"),
    ("I am terrified of the dark basement", "fear"),
    ("scared and afraid of the spiders", "fear"),
    ("my hands shake, I am frightened and scared", "fear"),
    ("afraid something terrible will happen tonight", "fear"),
    ("so bored with nothing to do all afternoon", "boredom"),
    ("this lecture is dull and boring", "boredom"),
    ("bored bored bored, waiting forever", "boredom"),
    ("another boring dull evening at home", "boredom"),
];

/// Write a CSV with an extra id column and the required columns.
pub fn write_emotion_csv(dir: &Path) -> PathBuf {
    let mut data = String::from("id,text,Emotion\n");
    for (idx, (text, label)) in EMOTION_ROWS.iter().enumerate() {
        data.push_str(&format!("{idx},\"{text}\",{label}\n"));
    }
    write_raw(dir, "emotions.csv", &data)
}

pub fn write_raw(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write dataset");
    path
}
