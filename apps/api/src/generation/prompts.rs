// Prompt templates for every operation kind.
// Placeholders are `{name}` and are filled by `builder::render`.

use crate::llm_client::prompts::JSON_ARRAY_ONLY;

/// Replace: {cv_text}
pub const CV_ANALYSIS_TEMPLATE: &str = "Analyze this CV and provide specific feedback on:
1. Strengths
2. Areas for improvement
3. Missing elements
4. Suggestions to make it stand out

CV Content:
{cv_text}

Please provide detailed, constructive feedback.";

/// Replace: {role}, {years_experience}
pub const JOB_DESCRIPTION_TEMPLATE: &str = "Generate a detailed job description for a {role} position requiring {years_experience} years of experience.
Include:
1. Job title and overview
2. Key responsibilities
3. Required qualifications
4. Preferred skills
5. Company culture and benefits";

/// Replace: {cv_text}, {job_description}, {company_name}
pub const COVER_LETTER_TEMPLATE: &str = "Generate a professional cover letter based on the following information:

CV Content:
{cv_text}

Job Description:
{job_description}

Company Name: {company_name}

Create a compelling cover letter that:
1. Addresses the specific job requirements
2. Highlights relevant experience
3. Shows enthusiasm for the role
4. Maintains a professional tone";

/// Replace: {system}, {question_style}, {notes_text}, {question_format}
pub const QUIZ_TEMPLATE: &str = "{system}
Generate 5 {question_style} questions based on these notes:
{notes_text}

Each question must follow this EXACT format:
{question_format}";

pub const QUIZ_SYSTEM: &str = JSON_ARRAY_ONLY;

pub const MULTIPLE_CHOICE_FORMAT: &str = r#"{
  "question": "Write the question here?",
  "options": ["First option", "Second option", "Third option", "Fourth option"],
  "answer": "The correct option text",
  "explanation": "Brief explanation of the answer"
}"#;

pub const FILL_BLANKS_FORMAT: &str = r#"{
  "question": "Complete sentence with _____ for the blank",
  "answer": "The word that goes in the blank",
  "explanation": "Brief explanation of why this is correct"
}"#;

pub const SHORT_ANSWER_FORMAT: &str = r#"{
  "question": "Write the question here?",
  "answer": "The correct answer",
  "explanation": "Brief explanation of the answer"
}"#;

/// Replace: {message}
pub const MOOD_SUPPORT_TEMPLATE: &str = "As an empathetic AI counselor, analyze this message and provide a supportive, encouraging response. Consider the emotional state and offer appropriate guidance or comfort.

User's message: {message}

Respond in a warm, understanding tone and keep the response concise (2-3 sentences).";

pub const STUDY_BREAK_PROMPT: &str = "Generate a short, practical mindfulness or study break suggestion that:
1. Takes 2-5 minutes
2. Helps reduce stress and improve focus
3. Can be done at a study desk
4. Is specific and actionable

Format the response as a single paragraph (2-3 sentences).";

/// Replace: {context}
pub const MOTIVATION_TEMPLATE: &str = "Generate a personalized motivational message for a student with this context: {context}

The message should be:
1. Personal and specific to their context
2. Encouraging and positive
3. Action-oriented
4. Concise (2-3 sentences)

Make it sound natural and inspiring, not cliché.";

/// Used when the student gives no context for a motivational message.
pub const DEFAULT_MOTIVATION_CONTEXT: &str = "studying and working towards their goals";
