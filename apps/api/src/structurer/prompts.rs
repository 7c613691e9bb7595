// Resume structuring prompt templates.
// All prompts for the structurer module are defined here.

pub const RESUME_STRUCTURE_SYSTEM: &str = "\
You are a precise resume data extractor. \
Parse resume text into structured JSON. \
You MUST respond with valid JSON only — no markdown fences, no explanations. \
Never invent employers, dates, or projects that are not in the text. \
If a section is absent from the resume, emit it as an empty array.";

pub const RESUME_STRUCTURE_PROMPT: &str = r#"Parse the following resume text into a structured JSON object.

RESUME TEXT:
{resume_text}

OUTPUT SCHEMA (return exactly this structure):
{
  "personal_info": {
    "name": "string", "email": "string", "phone": "string",
    "location": "string" | null, "links": ["string"]
  },
  "summary": "string",
  "work_experience": [
    {
      "company": "string", "role": "string", "duration": "string",
      "description": ["string"]
    }
  ],
  "internships": [
    {
      "company": "string", "role": "string", "duration": "string",
      "description": ["string"]
    }
  ],
  "projects": [
    {
      "name": "string", "description": ["string"], "technologies": ["string"],
      "url": "string" | null
    }
  ],
  "education": [
    {
      "institution": "string", "degree": "string", "year": "string"
    }
  ],
  "skills": ["string"]
}

Rules:
- "description" values are arrays of short bullet strings.
- Preserve the order entries appear in the resume.
- Omit nothing that is present; fabricate nothing that is absent."#;
