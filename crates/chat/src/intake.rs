/// Patient details collected in the chat panel and sent as plain text
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatientIntakeForm {
    pub patient_id: String,
    pub name: String,
    pub age: String,
    pub gender: String,
    pub contact: String,
    pub email: String,
    pub address: String,
    pub medical_history: String,
}

impl PatientIntakeForm {
    /// The instruction the agent receives
    pub fn to_message(&self) -> String {
        format!(
            "Add a new patient with the following details:\n\
             Patient ID: {}\n\
             Name: {}\n\
             Age: {}\n\
             Gender: {}\n\
             Contact: {}\n\
             Email: {}\n\
             Address: {}\n\
             Medical History: {}",
            self.patient_id,
            self.name,
            self.age,
            self.gender,
            self.contact,
            self.email,
            self.address,
            self.medical_history
        )
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
