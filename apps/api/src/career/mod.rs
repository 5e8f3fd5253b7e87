// Career tools: CV analysis, job description generation, cover letters.
// Each handler checks its preconditions, then runs ingestion → builder → client.

pub mod handlers;
