pub mod supabase_realtime;
