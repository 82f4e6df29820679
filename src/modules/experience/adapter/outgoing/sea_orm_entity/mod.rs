pub mod job_experiences;
