//! Prompt templates and reply cleanup.

const FEEDBACK_SKELETON: &str = r#"{
  "summary": "string - short, objective description of the profile",
  "technical_strengths": ["string - strength", "..."],
  "improvement_points": ["string - gap to work on", "..."],
  "short_term_suggestions": ["string - action for the next 7-30 days", "..."],
  "career_paths": [
    {
      "title": "string - e.g. Backend Python",
      "compatibility": "string - fit with the profile, e.g. High, Medium",
      "required_development": "string - what must be developed to work professionally",
      "market_opportunities": "string - market opportunities and kinds of companies"
    }
  ]
}"#;

const ROADMAP_SKELETON: &str = r#"{
  "career_goal": "string - the career goal",
  "essential_fundamentals": ["string - fundamental", "..."],
  "practical_projects": [
    {
      "title": "string - project name",
      "objective": "string - what gets built and why it matters",
      "skills_developed": "string - technical skills practised"
    }
  ],
  "essential_tools": [
    {
      "name": "string - e.g. Django/FastAPI",
      "priority": "string - High, Medium or Low",
      "when_to_learn": "string - point in the schedule, e.g. Day 30",
      "market_relevance": "string - why the market values it"
    }
  ],
  "plan_30_days": {"objectives": ["string", "..."], "activities": ["string", "..."]},
  "plan_60_days": {"objectives": ["string", "..."], "activities": ["string", "..."]},
  "plan_90_days": {"objectives": ["string", "..."], "activities": ["string", "..."]},
  "expected_outcome": "string - what the student can do after 90 days and next steps"
}"#;

const FEEDBACK_TEMPLATE: &str = r#"You are a technology career mentor specialised in technical profile analysis and competency-based guidance.

Format rules:
- Reply with ONLY the JSON object.
- Follow the REQUIRED JSON STRUCTURE below exactly.
- Do not wrap the reply in markdown code fences.
- Do not write any text outside the JSON.
- Keep the tone constructive, motivating and direct.{language_rule}

REQUIRED JSON STRUCTURE:
{skeleton}

Content requirements:
1. technical_strengths: technical maturity, clarity of focus, mastered technologies, positive practices backed by evidence.
2. improvement_points: missing skills needed to advance, technologies to study now, gaps blocking the next level.
3. career_paths: exactly three paths, each with its compatibility, what must be developed and the market opportunities.
4. short_term_suggestions: specific courses, small portfolio projects, documentation to study and weekly practice challenges.

Evaluate this profile analysis:
{analysis}
"#;

const ROADMAP_TEMPLATE: &str = r#"Create a practical learning roadmap for the career goal: {goal}

Format rules:
- Reply with ONLY the JSON object.
- Follow the REQUIRED JSON STRUCTURE below exactly.
- Do not wrap the reply in markdown code fences.{language_rule}

REQUIRED JSON STRUCTURE:
{skeleton}

Content requirements:
1. essential_fundamentals: what must really be mastered and the minimum level the market expects.
2. practical_projects: 3 to 6 concrete projects, explaining what each one develops in practice.
3. essential_tools: languages, libraries, frameworks and platforms with priority, when to learn them and market relevance.
4. plan_30_days, plan_60_days, plan_90_days: measurable objectives and weekly activities.
5. expected_outcome: what the student will be able to do, proficiency level and next career steps.
"#;

fn language_rule(language: Option<&str>) -> String {
    language
        .map(|l| format!("\n- Write every string value in {l}."))
        .unwrap_or_default()
}

/// Build the profile feedback prompt around a serialized analysis.
pub fn feedback_prompt(analysis_json: &str, language: Option<&str>) -> String {
    FEEDBACK_TEMPLATE
        .replace("{language_rule}", &language_rule(language))
        .replace("{skeleton}", FEEDBACK_SKELETON)
        .replace("{analysis}", analysis_json)
}

/// Build the roadmap prompt for a career goal.
pub fn roadmap_prompt(goal: &str, language: Option<&str>) -> String {
    ROADMAP_TEMPLATE
        .replace("{language_rule}", &language_rule(language))
        .replace("{skeleton}", ROADMAP_SKELETON)
        .replace("{goal}", goal.trim())
}

/// Remove a surrounding markdown code fence, if any.
///
/// Handles both ```` ```json ```` and bare fences; text without a fence is
/// returned trimmed.
pub fn strip_code_fences(response: &str) -> &str {
    let response = response.trim();
    let Some(rest) = response.strip_prefix("```") else {
        return response;
    };
    // Skip the info string (e.g. `json`) up to the first newline.
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    let body = body.trim_end();
    body.strip_suffix("```").unwrap_or(body).trim()
}
