pub mod analyze_plant_photo;
pub mod generate_plant_content;
