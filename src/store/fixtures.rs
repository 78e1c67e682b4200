// src/store/fixtures.rs
//
// Conjunto de demonstração que semeia o backend em memória na subida do
// processo. Os identificadores são fixos para que as referências cruzadas
// (acolhido -> avaliações/atendimentos/histórico) sejam estáveis.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use sqlx::types::Json;
use uuid::{Uuid, uuid};

use crate::models::{
    clinical::{
        Appointment, AppointmentType, ConsumptionMethod, Evaluation, EvaluationType,
        FrequencyOfUse, SubstanceHistory, SubstanceType,
    },
    resident::{AccommodationStatus, Address, EmergencyContact, Gender, MaritalStatus, Resident},
};

pub const RESIDENT_CARLOS: Uuid = uuid!("00000000-0000-4000-8000-000000000001");
pub const RESIDENT_ROBERTO: Uuid = uuid!("00000000-0000-4000-8000-000000000002");
pub const RESIDENT_FERNANDA: Uuid = uuid!("00000000-0000-4000-8000-000000000003");
pub const RESIDENT_MARCOS: Uuid = uuid!("00000000-0000-4000-8000-000000000004");
pub const RESIDENT_JULIANA: Uuid = uuid!("00000000-0000-4000-8000-000000000005");

const PROF_ANA: Uuid = uuid!("00000000-0000-4000-9000-000000000001");
const PROF_PATRICIA: Uuid = uuid!("00000000-0000-4000-9000-000000000002");
const PROF_MARIA_CLARA: Uuid = uuid!("00000000-0000-4000-9000-000000000003");
const PROF_RICARDO: Uuid = uuid!("00000000-0000-4000-9000-000000000004");
const PROF_JOAO: Uuid = uuid!("00000000-0000-4000-9000-000000000005");

pub struct SeedData {
    pub residents: Vec<Resident>,
    pub evaluations: Vec<Evaluation>,
    pub appointments: Vec<Appointment>,
    pub substance_histories: Vec<SubstanceHistory>,
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("data de fixture válida")
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("instante de fixture válido")
}

pub fn seed() -> SeedData {
    SeedData {
        residents: residents(),
        evaluations: evaluations(),
        appointments: appointments(),
        substance_histories: substance_histories(),
    }
}

fn residents() -> Vec<Resident> {
    vec![
        Resident {
            id: RESIDENT_CARLOS,
            full_name: "Carlos Eduardo Silva".into(),
            cpf: "123.456.789-00".into(),
            rg: "12.345.678-9".into(),
            birth_date: day(1985, 3, 15),
            gender: Gender::Male,
            marital_status: MaritalStatus::Divorced,
            education: "Ensino Médio Completo".into(),
            birthplace: "São Paulo, SP".into(),
            address: Json(Address {
                street: "Rua das Flores".into(),
                number: "123".into(),
                complement: None,
                neighborhood: "Centro".into(),
                city: "São Paulo".into(),
                state: "SP".into(),
                zip_code: "01234-567".into(),
            }),
            emergency_contact: Json(EmergencyContact {
                name: "Maria Silva".into(),
                relationship: "Mãe".into(),
                phone: "(11) 98765-4321".into(),
            }),
            judicial_situation: Some("Nenhuma pendência".into()),
            admission_date: day(2024, 8, 15),
            expected_discharge_date: Some(day(2025, 2, 15)),
            status: AccommodationStatus::Active,
            photo_url: None,
            created_at: at(2024, 8, 15, 9, 0),
            updated_at: at(2024, 11, 20, 9, 0),
        },
        Resident {
            id: RESIDENT_ROBERTO,
            full_name: "Roberto Almeida Santos".into(),
            cpf: "987.654.321-00".into(),
            rg: "98.765.432-1".into(),
            birth_date: day(1992, 7, 22),
            gender: Gender::Male,
            marital_status: MaritalStatus::Single,
            education: "Ensino Fundamental Incompleto".into(),
            birthplace: "Rio de Janeiro, RJ".into(),
            address: Json(Address {
                street: "Av. Principal".into(),
                number: "456".into(),
                complement: Some("Apto 12".into()),
                neighborhood: "Jardim América".into(),
                city: "Rio de Janeiro".into(),
                state: "RJ".into(),
                zip_code: "20000-000".into(),
            }),
            emergency_contact: Json(EmergencyContact {
                name: "José Santos".into(),
                relationship: "Pai".into(),
                phone: "(21) 99876-5432".into(),
            }),
            judicial_situation: None,
            admission_date: day(2024, 10, 1),
            expected_discharge_date: Some(day(2025, 4, 1)),
            status: AccommodationStatus::Active,
            photo_url: None,
            created_at: at(2024, 10, 1, 9, 0),
            updated_at: at(2024, 11, 28, 9, 0),
        },
        Resident {
            id: RESIDENT_FERNANDA,
            full_name: "Fernanda Costa Lima".into(),
            cpf: "456.789.123-00".into(),
            rg: "45.678.912-3".into(),
            birth_date: day(1988, 11, 30),
            gender: Gender::Female,
            marital_status: MaritalStatus::Married,
            education: "Ensino Superior Incompleto".into(),
            birthplace: "Belo Horizonte, MG".into(),
            address: Json(Address {
                street: "Rua do Comércio".into(),
                number: "789".into(),
                complement: None,
                neighborhood: "Savassi".into(),
                city: "Belo Horizonte".into(),
                state: "MG".into(),
                zip_code: "30140-000".into(),
            }),
            emergency_contact: Json(EmergencyContact {
                name: "Pedro Lima".into(),
                relationship: "Esposo".into(),
                phone: "(31) 98888-7777".into(),
            }),
            judicial_situation: None,
            admission_date: day(2024, 6, 10),
            expected_discharge_date: None,
            status: AccommodationStatus::Discharged,
            photo_url: None,
            created_at: at(2024, 6, 10, 9, 0),
            updated_at: at(2024, 11, 1, 9, 0),
        },
        Resident {
            id: RESIDENT_MARCOS,
            full_name: "Marcos Vinícius Oliveira".into(),
            cpf: "321.654.987-00".into(),
            rg: "32.165.498-7".into(),
            birth_date: day(1995, 2, 14),
            gender: Gender::Male,
            marital_status: MaritalStatus::Single,
            education: "Ensino Médio Incompleto".into(),
            birthplace: "Curitiba, PR".into(),
            address: Json(Address {
                street: "Av. das Araucárias".into(),
                number: "1000".into(),
                complement: None,
                neighborhood: "Batel".into(),
                city: "Curitiba".into(),
                state: "PR".into(),
                zip_code: "80420-000".into(),
            }),
            emergency_contact: Json(EmergencyContact {
                name: "Ana Oliveira".into(),
                relationship: "Irmã".into(),
                phone: "(41) 99999-8888".into(),
            }),
            judicial_situation: Some("Em liberdade condicional".into()),
            admission_date: day(2024, 9, 20),
            expected_discharge_date: Some(day(2025, 3, 20)),
            status: AccommodationStatus::Active,
            photo_url: None,
            created_at: at(2024, 9, 20, 9, 0),
            updated_at: at(2024, 12, 1, 9, 0),
        },
        Resident {
            id: RESIDENT_JULIANA,
            full_name: "Juliana Pereira Martins".into(),
            cpf: "654.321.987-00".into(),
            rg: "65.432.198-7".into(),
            birth_date: day(1990, 6, 8),
            gender: Gender::Female,
            marital_status: MaritalStatus::Divorced,
            education: "Ensino Superior Completo".into(),
            birthplace: "Porto Alegre, RS".into(),
            address: Json(Address {
                street: "Rua da Redenção".into(),
                number: "555".into(),
                complement: None,
                neighborhood: "Cidade Baixa".into(),
                city: "Porto Alegre".into(),
                state: "RS".into(),
                zip_code: "90050-000".into(),
            }),
            emergency_contact: Json(EmergencyContact {
                name: "Regina Martins".into(),
                relationship: "Mãe".into(),
                phone: "(51) 98765-1234".into(),
            }),
            judicial_situation: None,
            admission_date: day(2024, 7, 5),
            expected_discharge_date: None,
            status: AccommodationStatus::Evaded,
            photo_url: None,
            created_at: at(2024, 7, 5, 9, 0),
            updated_at: at(2024, 10, 15, 9, 0),
        },
    ]
}

fn substance_histories() -> Vec<SubstanceHistory> {
    vec![
        SubstanceHistory {
            id: uuid!("00000000-0000-4000-a000-000000000001"),
            resident_id: RESIDENT_CARLOS,
            substance: SubstanceType::Alcohol,
            substance_other: None,
            start_age: 16,
            duration_years: 23,
            frequency: FrequencyOfUse::Daily,
            last_use_date: day(2024, 8, 14),
            consumption_method: ConsumptionMethod::Oral,
            is_poly_user: true,
            relapse_history: "3 recaídas anteriores, a última em 2023".into(),
            previous_hospitalizations: 2,
            treatment_attempts: 3,
            physical_impacts: "Problemas hepáticos, gastrite crônica".into(),
            social_impacts: "Perda de emprego, isolamento social".into(),
            family_impacts: "Divórcio, afastamento dos filhos".into(),
            created_at: at(2024, 8, 15, 10, 0),
        },
        SubstanceHistory {
            id: uuid!("00000000-0000-4000-a000-000000000002"),
            resident_id: RESIDENT_CARLOS,
            substance: SubstanceType::Cocaine,
            substance_other: None,
            start_age: 22,
            duration_years: 17,
            frequency: FrequencyOfUse::Weekly,
            last_use_date: day(2024, 8, 10),
            consumption_method: ConsumptionMethod::Snorted,
            is_poly_user: true,
            relapse_history: "2 recaídas relacionadas ao uso de cocaína".into(),
            previous_hospitalizations: 1,
            treatment_attempts: 2,
            physical_impacts: "Desvio de septo, problemas cardíacos leves".into(),
            social_impacts: "Dívidas financeiras, perda de amizades".into(),
            family_impacts: "Conflitos familiares intensos".into(),
            created_at: at(2024, 8, 15, 10, 30),
        },
        SubstanceHistory {
            id: uuid!("00000000-0000-4000-a000-000000000003"),
            resident_id: RESIDENT_ROBERTO,
            substance: SubstanceType::Crack,
            substance_other: None,
            start_age: 18,
            duration_years: 14,
            frequency: FrequencyOfUse::Daily,
            last_use_date: day(2024, 9, 30),
            consumption_method: ConsumptionMethod::Smoked,
            is_poly_user: false,
            relapse_history: "5 recaídas em tratamentos anteriores".into(),
            previous_hospitalizations: 4,
            treatment_attempts: 5,
            physical_impacts: "Problemas respiratórios, perda de peso severa".into(),
            social_impacts: "Situação de rua por 2 anos".into(),
            family_impacts: "Rompimento total com a família".into(),
            created_at: at(2024, 10, 1, 10, 0),
        },
    ]
}

fn evaluations() -> Vec<Evaluation> {
    vec![
        Evaluation {
            id: uuid!("00000000-0000-4000-b000-000000000001"),
            resident_id: RESIDENT_CARLOS,
            date: at(2024, 11, 15, 14, 0),
            professional_id: PROF_PATRICIA,
            professional_name: "Dra. Patrícia Mendes".into(),
            kind: EvaluationType::Psychological,
            diagnosis: "Transtorno por uso de álcool em remissão inicial".into(),
            observations: "Paciente apresenta boa adesão ao tratamento. Demonstra motivação \
                           para mudança e consciência sobre os danos causados pelo uso."
                .into(),
            behavior_scale: 8,
            discipline_scale: 7,
            commitment_scale: 9,
            evolution_since_last_eval:
                "Melhora significativa no controle emocional e nas relações interpessoais".into(),
            created_at: at(2024, 11, 15, 14, 0),
        },
        Evaluation {
            id: uuid!("00000000-0000-4000-b000-000000000002"),
            resident_id: RESIDENT_CARLOS,
            date: at(2024, 10, 15, 14, 0),
            professional_id: PROF_MARIA_CLARA,
            professional_name: "Assistente Social Maria Clara".into(),
            kind: EvaluationType::Social,
            diagnosis: "Vínculos familiares fragilizados em processo de reconstrução".into(),
            observations: "Família demonstra interesse em participar do processo de recuperação. \
                           Filhos ainda resistentes ao contato."
                .into(),
            behavior_scale: 7,
            discipline_scale: 7,
            commitment_scale: 8,
            evolution_since_last_eval:
                "Primeiro contato telefônico com os filhos realizado com sucesso".into(),
            created_at: at(2024, 10, 15, 14, 0),
        },
        Evaluation {
            id: uuid!("00000000-0000-4000-b000-000000000003"),
            resident_id: RESIDENT_ROBERTO,
            date: at(2024, 11, 20, 14, 0),
            professional_id: PROF_PATRICIA,
            professional_name: "Dra. Patrícia Mendes".into(),
            kind: EvaluationType::Psychological,
            diagnosis: "Transtorno por uso de crack - fase inicial de tratamento".into(),
            observations: "Paciente ainda apresenta fissura intensa. Necessita acompanhamento \
                           intensivo."
                .into(),
            behavior_scale: 5,
            discipline_scale: 6,
            commitment_scale: 6,
            evolution_since_last_eval:
                "Estabilização do quadro agudo. Início de participação em grupos".into(),
            created_at: at(2024, 11, 20, 14, 0),
        },
    ]
}

fn appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: uuid!("00000000-0000-4000-c000-000000000001"),
            resident_id: RESIDENT_CARLOS,
            date: at(2024, 12, 2, 10, 0),
            kind: AppointmentType::Individual,
            professional_id: PROF_PATRICIA,
            professional_name: "Dra. Patrícia Mendes".into(),
            objective: "Trabalhar estratégias de prevenção de recaída".into(),
            report: "Sessão produtiva. Paciente identificou gatilhos principais e desenvolveu \
                     plano de enfrentamento."
                .into(),
            referrals: Some("Encaminhado para grupo de prevenção de recaída".into()),
            next_steps: Some("Continuar trabalho com técnicas de mindfulness".into()),
            created_at: at(2024, 12, 2, 11, 0),
        },
        Appointment {
            id: uuid!("00000000-0000-4000-c000-000000000002"),
            resident_id: RESIDENT_CARLOS,
            date: at(2024, 11, 28, 14, 0),
            kind: AppointmentType::Group,
            professional_id: PROF_ANA,
            professional_name: "Dr. Ana Beatriz".into(),
            objective: "Grupo terapêutico - compartilhamento de experiências".into(),
            report: "Paciente participou ativamente, compartilhando sua história e oferecendo \
                     suporte aos colegas."
                .into(),
            referrals: None,
            next_steps: Some("Manter participação semanal no grupo".into()),
            created_at: at(2024, 11, 28, 15, 0),
        },
        Appointment {
            id: uuid!("00000000-0000-4000-c000-000000000003"),
            resident_id: RESIDENT_ROBERTO,
            date: at(2024, 12, 1, 9, 0),
            kind: AppointmentType::Clinical,
            professional_id: PROF_RICARDO,
            professional_name: "Dr. Ricardo Souza".into(),
            objective: "Avaliação clínica mensal".into(),
            report: "Exames laboratoriais dentro da normalidade. Ganho de peso de 3kg. Pressão \
                     arterial estável."
                .into(),
            referrals: Some("Solicitado exame de função pulmonar".into()),
            next_steps: Some("Retorno em 30 dias".into()),
            created_at: at(2024, 12, 1, 10, 0),
        },
        Appointment {
            id: uuid!("00000000-0000-4000-c000-000000000004"),
            resident_id: RESIDENT_MARCOS,
            date: at(2024, 12, 3, 11, 0),
            kind: AppointmentType::Spiritual,
            professional_id: PROF_JOAO,
            professional_name: "Pastor João".into(),
            objective: "Acompanhamento espiritual semanal".into(),
            report: "Paciente demonstra busca por espiritualidade como suporte na recuperação."
                .into(),
            referrals: None,
            next_steps: Some("Continuar acompanhamento semanal".into()),
            created_at: at(2024, 12, 3, 12, 0),
        },
    ]
}
