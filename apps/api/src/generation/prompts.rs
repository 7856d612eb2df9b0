// All LLM prompt constants and sampling settings for the Generation module.

use crate::llm_client::GenerationConfig;

/// Technical prompt template. Replace every `{user_input}` before sending.
pub const TECH_PROMPT_TEMPLATE: &str = r#"Generate a creative and innovative technical application idea based on the user's interest: "{user_input}".

The response should be:
- A single, compelling app/software concept
- 1-2 sentences maximum
- Focus on unique features or novel approaches
- Make it specific and actionable
- Avoid generic ideas

Examples:
- For "fitness": "A mirror app that uses AI to analyze your workout form in real-time and suggests micro-corrections through haptic feedback in smart clothing"
- For "cooking": "An AR app that overlays cooking instructions directly onto your ingredients, adjusting recipes based on what's actually in your fridge using computer vision"

Generate one creative technical prompt for: {user_input}"#;

/// Higher temperature than design: concepts should vary between calls.
pub const TECH_GENERATION_CONFIG: GenerationConfig = GenerationConfig {
    temperature: 0.9,
    top_k: 40,
    top_p: 0.95,
    max_output_tokens: 150,
};

/// Fonts the model must choose from. All are served by the web-font stylesheet endpoint.
pub const CURATED_FONTS: &[&str] = &[
    "Playfair Display",
    "Montserrat",
    "Open Sans",
    "Lato",
    "Roboto",
    "Poppins",
    "Inter",
    "Merriweather",
    "Source Sans Pro",
    "Nunito",
    "Raleway",
    "Oswald",
    "Lora",
    "Ubuntu",
    "Crimson Text",
    "Work Sans",
    "Fira Sans",
    "PT Sans",
    "Libre Baskerville",
    "Quicksand",
    "Rubik",
    "DM Sans",
    "Space Grotesk",
    "Epilogue",
    "Plus Jakarta Sans",
    "Manrope",
    "Outfit",
    "Lexend",
];

/// Design prompt template.
/// Replace: {user_input} (twice), {font_list}
pub const DESIGN_PROMPT_TEMPLATE: &str = r##"Generate a typography and color scheme based on the theme: "{user_input}".

Please respond with a JSON object in this exact format:
{
  "fonts": {
    "primary": "Font Name",
    "secondary": "Font Name"
  },
  "colors": ["#hexcode1", "#hexcode2", "#hexcode3", "#hexcode4", "#hexcode5"],
  "description": "Brief description of why these fonts and colors work together for this theme"
}

Requirements:
- Choose fonts that are available on Google Fonts
- Primary font should be for headings/titles
- Secondary font should be for body text/subtitles
- Provide 3-7 colors in hex format
- Colors should work harmoniously together
- Consider the mood and personality of the theme
- Description should be 1-2 sentences

Popular Google Fonts to choose from: {font_list}.

Theme: {user_input}"##;

pub const DESIGN_GENERATION_CONFIG: GenerationConfig = GenerationConfig {
    temperature: 0.8,
    top_k: 40,
    top_p: 0.95,
    max_output_tokens: 300,
};

pub fn build_tech_prompt(user_input: &str) -> String {
    TECH_PROMPT_TEMPLATE.replace("{user_input}", user_input)
}

pub fn build_design_prompt(user_input: &str) -> String {
    // Font list first so a theme containing "{font_list}" is left alone.
    DESIGN_PROMPT_TEMPLATE
        .replace("{font_list}", &CURATED_FONTS.join(", "))
        .replace("{user_input}", user_input)
}
