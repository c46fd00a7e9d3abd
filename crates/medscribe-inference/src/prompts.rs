//! Fixed instructions sent to the vision model.

/// Instruction paired with every uploaded medicine image.
pub const MEDICINE_DESCRIPTION_PROMPT: &str = concat!(
    "You are a medicine identification and description expert. ",
    "Examine the provided image carefully and provide a detailed, structured description of the medicine, including: ",
    "- Name of the medicine or supplement ",
    "- Purpose and typical usage ",
    "- Typical dosage ",
    "- Possible side effects and warnings ",
    "Format your answer in clear sections or bullet points. ",
    "Do not add extra suggestions or instructions at the end. ",
    "If the image does not show a medicine or you cannot identify it, politely state in one short sentence that you are unable to determine the medicine."
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_requests_all_sections() {
        for section in [
            "Name of the medicine",
            "Purpose and typical usage",
            "Typical dosage",
            "side effects and warnings",
        ] {
            assert!(
                MEDICINE_DESCRIPTION_PROMPT.contains(section),
                "prompt should ask for '{}'",
                section
            );
        }
    }

    #[test]
    fn test_prompt_handles_unidentifiable_images() {
        assert!(MEDICINE_DESCRIPTION_PROMPT.contains("unable to determine the medicine"));
        assert!(MEDICINE_DESCRIPTION_PROMPT.contains("Do not add extra suggestions"));
    }
}
