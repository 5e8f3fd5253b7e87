// Study and wellbeing tools built on the same generation pipeline:
// quizzes from uploaded notes, mood check-ins, study breaks, motivation.

pub mod handlers;
pub mod quiz;
