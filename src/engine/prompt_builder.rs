use serde_json::{json, Value};

use crate::engine::narrative::{DilemmaRequest, PmqRequest};
use crate::model::minister::Minister;
use crate::model::stats::Stats;

/// Builds the prompts sent to the narrator.
/// Formatting only: no parsing, no networking.
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn dilemma(request: &DilemmaRequest) -> String {
        let mut prompt = String::new();

        push_dilemma_system_prompt(&mut prompt);
        push_situation(&mut prompt, &request.stats);
        push_theme(&mut prompt, request.kind.tag());
        if let Some(minister) = &request.linked_minister {
            push_minister_subject(&mut prompt, minister);
        }
        push_dilemma_reminder(&mut prompt);

        prompt
    }

    pub fn pmq(request: &PmqRequest) -> String {
        let mut prompt = String::new();

        prompt.push_str("Evaluate the Prime Minister's response at Prime Minister's Questions.\n\n");
        prompt.push_str(&format!("QUESTION: \"{}\"\n", request.question));
        prompt.push_str(&format!("PM RESPONSE: \"{}\"\n\n", request.response));
        prompt.push_str(
            "Return JSON {\"score\": 1-10, \"commentary\": \"witty/sarcastic British remark\"}.\n\
             Output the JSON object only.\n",
        );

        prompt
    }
}

fn push_dilemma_system_prompt(prompt: &mut String) {
    prompt.push_str(
        "Generate a UK political dilemma for the Prime Minister.\n\n\
Rules:\n\
- Tone: dry, sarcastic, British.\n\
- Draw on real issues: Ukraine, EU Rejoin pressure, Pres. Grump, Bank of England, inflation.\n\
- Provide exactly 3 choices.\n\
- Every choice carries consequences for approval, partyUnity, budget, influence, mediaPerception and nationalSecurity.\n\
- Budget changes are in billions of pounds; other changes are percentage points.\n\
- For ministerHappiness, return an array of {ministerName, happinessDelta}.\n\n",
    );
}

fn push_situation(prompt: &mut String, stats: &Stats) {
    prompt.push_str("CURRENT SITUATION:\n");
    prompt.push_str(&format!("Day: {}, Week {}\n", stats.day, stats.week));
    prompt.push_str(&format!("Approval: {}%\n", stats.approval));
    prompt.push_str(&format!("Party unity: {}%\n", stats.party_unity));
    prompt.push_str(&format!("Budget: £{}bn\n", stats.budget));
    prompt.push_str(&format!("National security: {}%\n\n", stats.national_security));
}

fn push_theme(prompt: &mut String, theme: &str) {
    prompt.push_str(&format!("THEME: {}\n\n", theme));
}

fn push_minister_subject(prompt: &mut String, minister: &Minister) {
    prompt.push_str(&format!(
        "SUBJECT: {} ({:?}, goal: {}).\n\n",
        minister.name, minister.personality, minister.goal
    ));
}

fn push_dilemma_reminder(prompt: &mut String) {
    prompt.push_str(
        "Respond with a single JSON object of the form:\n\
{\"title\": string, \"description\": string, \"options\": [{\"label\": string, \"description\": string, \"flavourText\": string, \"consequences\": {...}}]}\n\
No prose outside the JSON.\n",
    );
}

/// JSON schema for a dilemma, for servers that honour structured output.
pub fn dilemma_schema() -> Value {
    let number = json!({ "type": "number" });

    json!({
        "type": "object",
        "properties": {
            "title": { "type": "string" },
            "description": { "type": "string" },
            "options": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "label": { "type": "string" },
                        "description": { "type": "string" },
                        "flavourText": { "type": "string" },
                        "consequences": {
                            "type": "object",
                            "properties": {
                                "approval": number,
                                "partyUnity": number,
                                "budget": number,
                                "influence": number,
                                "mediaPerception": number,
                                "nationalSecurity": number,
                                "ministerHappiness": {
                                    "type": "array",
                                    "items": {
                                        "type": "object",
                                        "properties": {
                                            "ministerName": { "type": "string" },
                                            "happinessDelta": number
                                        },
                                        "required": ["ministerName", "happinessDelta"]
                                    }
                                }
                            }
                        }
                    },
                    "required": ["label", "description", "consequences"]
                }
            }
        },
        "required": ["title", "description", "options"]
    })
}

pub fn pmq_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "score": { "type": "number" },
            "commentary": { "type": "string" }
        },
        "required": ["score", "commentary"]
    })
}
