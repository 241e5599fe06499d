#[derive(Debug, Clone)]
pub struct AnalyzePlantPhotoInput {
    pub image_data: Vec<u8>,
    pub mime_type: String,
    pub plant_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GeneratePlantContentInput {
    pub plant_name: String,
    pub species: Option<String>,
}
