//! Course outline prompt.

/// Placeholder replaced by the course title.
const TITLE_PLACEHOLDER: &str = "{title}";

/// Instruction template sent to the generation service. Section names are
/// relied on by the landing page renderer; keep them stable.
const COURSE_OUTLINE_TEMPLATE: &str = r#"You are an expert educational designer. Create a **detailed, descriptive course outline** for the course titled "{title}".

The output must look like a semester syllabus with clear sections, formatted with Markdown-style headings.

Required sections:
1. **Objective of the Course:**
   - Write 1–2 descriptive paragraphs explaining the main goal of the course and what students will achieve.

2. **Sample Syllabus (Semester-wise):**
   - Provide 8–10 weekly modules or topics.
   - Each module should have a main theme and 2–3 sub-bullets describing subtopics or activities.

3. **Three Measurable Outcomes:**
   - Organize into categories: Knowledge, Comprehension, Application.
   - Use measurable verbs (e.g., explain, design, analyze, implement, evaluate).
   - Each outcome should have 2–3 specific points.

4. **Assessment Methods:**
   - List 3–4 types of assessments (assignments, quizzes, projects, presentations, final exam).
   - Briefly explain how each aligns with the learning outcomes.

5. **Recommended Readings:**
   - Provide 4–5 scholarly references (Author, Title, Year).

Formatting rules:
- Use Markdown-like formatting with **bold headings** and numbered/bulleted lists (like the sample in the screenshot).
- Ensure the text is **detailed and descriptive**, not just bullet points.
- Write naturally as if preparing an academic course syllabus."#;

/// Build the syllabus prompt for an already validated, trimmed title.
pub fn build_prompt(title: &str) -> String {
    COURSE_OUTLINE_TEMPLATE.replacen(TITLE_PLACEHOLDER, title, 1)
}
