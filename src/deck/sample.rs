/// Short annotated Ruy Lopez used as the initial transcript.
pub const SAMPLE_PGN: &str = r#"[Event "Fictional Game"]

e4 e5 2. Nf3 Nc6 3. Bb5 a6 {This is the Ruy Lopez exchange variation setup, though usually White takes on c6 here.} 4. Ba4 Nf6 5. O-O (5. Qe2 b5 6. Bb3 Be7) 5... Be7 {Black develops solidly.} 6. Re1 b5 7. Bb3 d6 8. c3 O-O {A very standard position. White plans d4.}"#;

/// Number of `{...}` comments in a transcript, i.e. how many cards a well-behaved
/// parsing engine should return for it.
pub fn count_comments(transcript: &str) -> usize {
    let mut depth = 0usize;
    let mut count = 0;
    for ch in transcript.chars() {
        match ch {
            '{' => {
                if depth == 0 {
                    count += 1;
                }
                depth += 1;
            }
            '}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    count
}
