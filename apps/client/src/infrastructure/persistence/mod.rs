pub mod supabase_review_repository;
