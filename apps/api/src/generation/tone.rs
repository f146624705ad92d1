//! Tone calibration for cover letters — maps a requested tone to the phrasing
//! used in the opening, motivation and closing paragraphs and the sign-off.
//!
//! The middle "track record" paragraph is shared by every tone; only the
//! framing around it changes.

use crate::generation::request::Tone;

/// Phrasing calibrated to one tone. `{job_title}` and `{company}` are
/// substituted by the cover letter strategy.
#[derive(Debug, Clone, Copy)]
pub struct ToneRegister {
    pub greeting: &'static str,
    pub opening: &'static str,
    pub motivation: &'static str,
    pub closing: &'static str,
    pub sign_off: &'static str,
}

pub fn cover_letter_register(tone: Tone) -> ToneRegister {
    match tone {
        Tone::Professional => ToneRegister {
            greeting: "Dear Hiring Manager,",
            opening: "I am writing to express my strong interest in the {job_title} position at {company}. \
                With my extensive experience in React, TypeScript, and modern web development practices, \
                I am confident that I would be a valuable addition to your team.",
            motivation: "What particularly excites me about this opportunity is {company}'s commitment to \
                innovation and creating exceptional user experiences. I am passionate about writing clean, \
                maintainable code and collaborating with cross-functional teams to deliver high-quality products. \
                My background in agile development methodologies and experience with modern tooling like Webpack, \
                Jest, and CI/CD pipelines would allow me to contribute immediately to your development process.",
            closing: "I am eager to bring my technical skills, problem-solving abilities, and enthusiasm for \
                frontend development to your team. I would welcome the opportunity to discuss how my experience \
                and passion for creating outstanding web applications align with {company}'s goals.\n\n\
                Thank you for considering my application. I look forward to hearing from you.",
            sign_off: "Sincerely,",
        },
        Tone::Enthusiastic => ToneRegister {
            greeting: "Dear Hiring Team,",
            opening: "I was thrilled to see the {job_title} opening at {company}! Building delightful products \
                with React and TypeScript is exactly the kind of work that gets me out of bed in the morning, \
                and I would love to do it with your team.",
            motivation: "{company}'s energy and focus on great user experiences really resonate with me. I love \
                pairing with teammates, sharing what I learn, and shipping features that make people smile.",
            closing: "I can't wait to bring my energy and skills to {company}. I'd be delighted to chat about how \
                I can help the team hit its next milestones!\n\nThank you so much for your time and consideration.",
            sign_off: "Warm regards,",
        },
        Tone::Creative => ToneRegister {
            greeting: "Hello {company} team,",
            opening: "Every great interface starts with a story, and I would love for my next chapter to be the \
                {job_title} role at {company}. I turn ideas into pixel-perfect, accessible experiences with \
                React, TypeScript, and a healthy obsession with detail.",
            motivation: "I'm drawn to {company} because you treat product craft as an art form. I thrive where \
                design and engineering meet, translating bold concepts into components people enjoy using.",
            closing: "If {company} is looking for someone who codes with curiosity and designs with empathy, I'd \
                love to sketch out what we could build together.\n\nThank you for reading my story.",
            sign_off: "With creativity and gratitude,",
        },
        Tone::Technical => ToneRegister {
            greeting: "Dear Hiring Manager,",
            opening: "I am applying for the {job_title} position at {company}. My background covers React 18, \
                TypeScript, state management (Redux, Context API), build tooling (Webpack, Vite), and automated \
                testing with Jest and CI/CD pipelines.",
            motivation: "{company}'s engineering challenges around performance and scale match my focus areas: \
                component architecture, code splitting, render profiling, and maintainable type-safe codebases.",
            closing: "I would welcome a technical conversation about {company}'s architecture and where my \
                experience can reduce delivery risk and improve performance.\n\nThank you for your consideration.",
            sign_off: "Best regards,",
        },
    }
}
