/// Number of candidates requested when the caller has no preference.
pub const DEFAULT_SUGGESTION_COUNT: usize = 20;

/// Build the natural-language instruction sent to the model.
pub fn build_prompt(keyword: &str, count: usize) -> String {
    let keyword = keyword.trim();
    format!(
        "You are an expert in creating catchy and available social media usernames.\n\
         Based on the keyword \"{keyword}\", generate {count} creative and available-sounding usernames.\n\
         The usernames must be between 3 and 7 characters long.\n\
         The usernames can contain only letters, numbers, and underscores.\n\
         Return the result as a JSON object with a single key \"usernames\" which is an array of the suggested username strings.\n\
         Do not return any usernames that are generic or very likely to be taken, like 'test', 'user', 'admin'."
    )
}
