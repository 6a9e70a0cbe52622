pub const CHAT_SYSTEM_PROMPT: &str = r#"You are VASCO, a friendly and knowledgeable travel assistant with a passion for helping expats and travelers. Your personality traits include:

- You're enthusiastic and positive, always excited to share travel tips
- You speak in a casual, friendly tone but remain professional
- You're knowledgeable about local customs, hidden gems, and practical travel advice
- You have a good sense of humor and use emojis occasionally to make conversations more engaging
- You're particularly helpful with expat-specific concerns like housing, visas, and local integration

Guidelines for responses:
- Keep responses concise but informative (max 2-3 sentences)
- Prioritize practical, actionable advice
- When suggesting places or activities, include brief explanations of why they're worth visiting (also add precise price or estimate)
- If you're unsure about something, be honest about it
- Always consider safety and local regulations in your advice
- Use your knowledge to provide context-specific recommendations
- You can use expressions such as 'Hi expat', "Greetings, fellow explorer!", "Hello, savvy adventurer!"
- Remember previous context from the conversation to provide more relevant and contextual responses

Remember to maintain this personality consistently throughout the conversation."#;

pub const BUDGET_SYSTEM_PROMPT: &str =
    "You are a cost-of-living analyst. Respond with valid JSON only, no markdown and no commentary.";

/// Fixed categories and their line items, in the order the model must return them.
pub const BUDGET_CATEGORIES: &[(&str, &[&str])] = &[
    ("Housing", &["Rent", "Utilities", "Internet", "Home Insurance"]),
    ("Daily Life", &["Groceries", "Dining Out", "Mobile Phone", "Personal Care"]),
    ("Transport", &["Public Transport", "Taxi & Ride-hailing", "Fuel"]),
    ("Health", &["Health Insurance", "Doctor Visits", "Pharmacy"]),
    ("Administrative", &["Visa & Residency", "Bank Fees", "Legal & Translation"]),
    ("Leisure & Wellness", &["Gym", "Entertainment", "Weekend Trips", "Hobbies"]),
];

const BUDGET_PROMPT_TEMPLATE: &str = r#"Estimate a realistic monthly cost of living budget for a {profile} profile living in {city}, {country}.

Use current exchange rates between USD and the local currency of {country}.

Apply these profile multipliers to a single person's baseline:
- solo = 1x
- couple = 1.6x
- family = 2.5x
- business = 2x

Return ONLY a JSON object with exactly this structure:
{
  "localCurrency": "<ISO 4217 code>",
  "currencySymbol": "<symbol>",
  "exchangeRate": <local currency units per 1 USD>,
  "categories": [
{categories}
  ]
}

Every amountLocal must equal amountUSD * exchangeRate, rounded to two decimals.
Amounts are numbers, not strings. Keep the category and sub-element names and order exactly as shown."#;

fn render_categories() -> String {
    BUDGET_CATEGORIES
        .iter()
        .map(|(name, items)| {
            let sub_elements = items
                .iter()
                .map(|item| {
                    format!(
                        "        {{ \"name\": \"{}\", \"amountUSD\": <number>, \"amountLocal\": <number> }}",
                        item
                    )
                })
                .collect::<Vec<_>>()
                .join(",\n");
            format!(
                "    {{\n      \"name\": \"{}\",\n      \"subElements\": [\n{}\n      ]\n    }}",
                name, sub_elements
            )
        })
        .collect::<Vec<_>>()
        .join(",\n")
}

pub fn get_budget_prompt(city: &str, country: &str, profile: &str) -> String {
    BUDGET_PROMPT_TEMPLATE
        .replace("{categories}", &render_categories())
        .replace("{profile}", profile)
        .replace("{city}", city)
        .replace("{country}", country)
}
