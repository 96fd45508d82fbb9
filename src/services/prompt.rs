//! Prompt templates sent to the completion provider. The story and the
//! model's previous answer are embedded verbatim.

/// Asks for 5-10 movies matching the psychology of the story, one
/// "Title (Year)" per line.
pub fn recommendation_prompt(story: &str) -> String {
    format!(
        "Perform a deep psychological analysis of the following story. \
Focus on subconscious themes, character motivations, and emotional depth. \
Based on this psychological analysis, recommend 5-10 movies that resonate with these deeper layers. \
For each movie, provide the title and year of release. \
Format your response as a list of movies, with each movie on a new line, \
showing the title and year in parentheses.\n\nStory: \"{}\"",
        story
    )
}

/// Asks the model to reduce its own answer to bare "Title (Year)" lines
pub fn refinement_prompt(previous_answer: &str) -> String {
    format!(
        "Refine the following list of movie recommendations. \
Extract just the movie titles and their release years. \
Return a list where each item is only the movie name and year in parentheses, \
with each movie on a new line.\n\nMovie Recommendations (from previous analysis):\n{}\n",
        previous_answer
    )
}

/// Asks for the main themes of a story as a comma-separated list
pub fn themes_prompt(story: &str) -> String {
    format!(
        "Identify 3-5 main themes present in the following story. \
Return the themes as a comma-separated list. Story: \"{}\"",
        story
    )
}
