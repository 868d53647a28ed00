mod bucket_properties;
mod triage_properties;
