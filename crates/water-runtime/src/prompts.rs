//! Prompt templates sent to the text generator.

use water_core::models::SummaryFacts;
use water_core::questionnaire::{Choice, FarmAnswers, ResidentialAnswers};

/// System turn prepended to every request.
pub const SYSTEM_INSTRUCTION: &str = "You are an environmental specialist. Provide concise, \
personalized water-saving advice based on the user's input and data.";

/// Prompt built from the faucet analysis summary.
pub fn faucet_prompt(facts: &SummaryFacts) -> String {
    format!(
        "Based on the user's water usage data:\n\
         - The total water usage is {:.2} liters.\n\
         - The peak water usage hour is {} with {:.2} liters used.\n\
         \n\
         Provide personalized advice to help the user reduce water usage during peak hours \
         and suggest habits to save water. Remember that the user may not be experienced in \
         technical terminology, so provide very general advice that the average person can \
         understand.",
        facts.total_usage_liters, facts.peak_hour, facts.peak_usage_liters
    )
}

/// Prompt built from the residential questionnaire.
pub fn residential_prompt(answers: &ResidentialAnswers) -> String {
    format!(
        "User Details:\n\
         - Household Size: {}\n\
         - Water-Intensive Activities: {}\n\
         - Water-Saving Practices: {}\n\
         - Motivation: {}\n\
         \n\
         Provide concise, actionable advice tailored to their motivation and water usage. \
         After providing advice, also provide some simple statistics to support how much water \
         or money that making these changes could save the user. Remember that the user might \
         not be technical or intelligent, so keep it clear and simple. Include the statistics \
         together with the water saving advice instead of in its own section. concisely elaborate on the statistics to explain to the user what the \
         statistics mean, because the everyday user might not understand gallons or litres.",
        answers.household_size.label(),
        answers.activity_frequency.label(),
        answers.practices_text(),
        answers.motivation.label()
    )
}

/// Prompt built from the farmer's questionnaire.
pub fn farm_prompt(answers: &FarmAnswers) -> String {
    format!(
        "The farmer has provided the following details:\n\
         - Crop Type: {}\n\
         - Irrigation Method: {}\n\
         - Soil Type: {}\n\
         - Average Annual Rainfall: {} inches\n\
         \n\
         Provide advice on optimal water usage and irrigation practices considering the type \
         of crop, irrigation method, soil type, and rainfall.",
        answers.crop.label(),
        answers.irrigation.label(),
        answers.soil.label(),
        answers.annual_rainfall_inches
    )
}
