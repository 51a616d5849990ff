//! Default program content: daily meditations and the prayer table.
//!
//! This module provides the built-in 34-day program data and the
//! read-side resolver that derives phase position and progress for a day.

use crate::phases::{Phase, PROGRAM_DAYS};
use crate::types::*;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Cached default program - built once and reused across all operations
static DEFAULT_PROGRAM: Lazy<Program> = Lazy::new(build_default_program_internal);

/// Get a reference to the cached default program
///
/// This function returns a reference to the pre-built program, avoiding
/// the overhead of rebuilding the full content tables on every operation.
pub fn get_default_program() -> &'static Program {
    &DEFAULT_PROGRAM
}

/// Builds the default program with built-in daily content and prayers
///
/// **Note**: For production use, prefer `get_default_program()` which returns
/// a cached reference. This function is retained for testing and custom
/// program creation.
pub fn build_default_program() -> Program {
    build_default_program_internal()
}

/// A day's content together with its derived phase position
///
/// Everything beyond `content` is computed on read and never stored.
#[derive(Clone, Debug)]
pub struct DayView {
    pub content: DailyContent,
    pub phase: Phase,
    pub position_in_phase: u32,
    pub phase_progress: f64,
    pub overall_progress: f64,
}

/// Resolve a day number to its content and derived phase position
///
/// Returns None when `day` is outside 1..=34 or the program has no record
/// for it.
pub fn day_view(program: &Program, day: u32) -> Option<DayView> {
    let phase = Phase::for_day(day)?;
    let content = program.days.get(&day)?.clone();
    let position_in_phase = day - phase.day_range().start() + 1;

    Some(DayView {
        content,
        phase,
        position_in_phase,
        phase_progress: f64::from(position_in_phase) / f64::from(phase.day_count()),
        overall_progress: f64::from(day) / f64::from(PROGRAM_DAYS),
    })
}

/// Ordinal word for a day number ("First" .. "Thirty-Fourth")
///
/// Out-of-range input yields None, never an error: this is a display
/// nicety and must fail soft.
pub fn ordinal_label(day: u32) -> Option<&'static str> {
    const ORDINALS: [&str; PROGRAM_DAYS as usize] = [
        "First",
        "Second",
        "Third",
        "Fourth",
        "Fifth",
        "Sixth",
        "Seventh",
        "Eighth",
        "Ninth",
        "Tenth",
        "Eleventh",
        "Twelfth",
        "Thirteenth",
        "Fourteenth",
        "Fifteenth",
        "Sixteenth",
        "Seventeenth",
        "Eighteenth",
        "Nineteenth",
        "Twentieth",
        "Twenty-First",
        "Twenty-Second",
        "Twenty-Third",
        "Twenty-Fourth",
        "Twenty-Fifth",
        "Twenty-Sixth",
        "Twenty-Seventh",
        "Twenty-Eighth",
        "Twenty-Ninth",
        "Thirtieth",
        "Thirty-First",
        "Thirty-Second",
        "Thirty-Third",
        "Thirty-Fourth",
    ];

    if (1..=PROGRAM_DAYS).contains(&day) {
        Some(ORDINALS[(day - 1) as usize])
    } else {
        None
    }
}

impl Program {
    /// Content record for a day, or None outside 1..=34
    pub fn day(&self, day: u32) -> Option<&DailyContent> {
        self.days.get(&day)
    }

    /// Prayer looked up by string id
    pub fn prayer(&self, id: &str) -> Option<&Prayer> {
        self.prayers.get(id)
    }

    /// The ordered prayer set for a phase, resolved against the table
    ///
    /// Ids that fail to resolve are skipped here; `validate()` reports them.
    pub fn prayers_for(&self, phase: Phase) -> Vec<&Prayer> {
        phase
            .prayer_ids()
            .iter()
            .filter_map(|id| self.prayers.get(*id))
            .collect()
    }

    /// Validate the program for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for day in 1..=PROGRAM_DAYS {
            match self.days.get(&day) {
                None => errors.push(format!("Program is missing content for day {}", day)),
                Some(content) => {
                    if content.day != day {
                        errors.push(format!(
                            "Content keyed at day {} carries day number {}",
                            day, content.day
                        ));
                    }
                    if content.title.is_empty() {
                        errors.push(format!("Day {} has an empty title", day));
                    }
                    if content.meditation.is_empty() {
                        errors.push(format!("Day {} has an empty meditation", day));
                    }
                }
            }
        }

        for (id, prayer) in &self.prayers {
            if id != &prayer.id {
                errors.push(format!(
                    "Prayer key '{}' doesn't match prayer.id '{}'",
                    id, prayer.id
                ));
            }
            if prayer.name.is_empty() {
                errors.push(format!("Prayer '{}' has an empty name", id));
            }

            // Combined display pairs lines by index, so the sides must agree
            let latin_lines = prayer.text.latin.lines().count();
            let english_lines = prayer.text.english.lines().count();
            if latin_lines != english_lines {
                errors.push(format!(
                    "Prayer '{}' has {} Latin lines but {} English lines",
                    id, latin_lines, english_lines
                ));
            }

            if prayer.text.latin.contains(crate::format::PAIR_SEPARATOR)
                || prayer.text.english.contains(crate::format::PAIR_SEPARATOR)
            {
                errors.push(format!(
                    "Prayer '{}' contains the reserved separator '{}'",
                    id,
                    crate::format::PAIR_SEPARATOR
                ));
            }
        }

        // Every prayer a phase references must resolve
        for phase in Phase::ALL {
            for id in phase.prayer_ids() {
                if !self.prayers.contains_key(*id) {
                    errors.push(format!(
                        "Phase {:?} references non-existent prayer '{}'",
                        phase, id
                    ));
                }
            }
        }

        errors
    }
}

/// Internal function that actually builds the program
fn build_default_program_internal() -> Program {
    let mut days = HashMap::new();
    let mut prayers = HashMap::new();

    let mut day = |n: u32, title: &str, meditation: &str, source: Option<&str>, reflection: &str| {
        days.insert(
            n,
            DailyContent {
                day: n,
                title: title.into(),
                meditation: meditation.into(),
                meditation_source: source.map(Into::into),
                reflection: reflection.into(),
            },
        );
    };

    // ========================================================================
    // Preliminary Days (1-12): emptying of the spirit of the world
    // ========================================================================

    day(
        1,
        "The Spirit of the World",
        "The world and its desires pass away, but whoever does the will of God remains forever. \
         Begin by naming, honestly, what the world asks of you each day.",
        Some("1 John 2:17"),
        "What does the spirit of the world demand of you, and what does it promise in return?",
    );
    day(
        2,
        "Vanity of Vanities",
        "Vanity of vanities, and all is vanity, except to love God and to serve him alone. \
         The highest wisdom is to reach toward heavenly things through contempt of the world.",
        Some("Imitation of Christ, I.1"),
        "Which vanity holds you most tightly right now?",
    );
    day(
        3,
        "Blessed Are the Poor",
        "Blessed are the poor in spirit, for theirs is the kingdom of heaven. Poverty of spirit \
         is not destitution but a hand left open.",
        Some("Matthew 5:3"),
        "Where are your hands still closed?",
    );
    day(
        4,
        "Serving Two Masters",
        "No one can serve two masters; you cannot serve God and mammon. A divided heart serves \
         neither well.",
        Some("Matthew 6:24"),
        "Name one place where your loyalty is divided.",
    );
    day(
        5,
        "The Narrow Gate",
        "Enter by the narrow gate, for the way is hard that leads to life, and those who find it \
         are few. Narrowness here is not cruelty; it is focus.",
        Some("Matthew 7:13-14"),
        "What would you have to set down to fit through a narrow gate?",
    );
    day(
        6,
        "The Hidden Treasure",
        "The kingdom of heaven is like treasure hidden in a field, which a man found and covered \
         up; then in his joy he goes and sells all that he has and buys that field.",
        Some("Matthew 13:44"),
        "Have you ever given something up with joy rather than regret? What made the difference?",
    );
    day(
        7,
        "The Kingdom Within",
        "The kingdom of God is not coming with signs to be observed; the kingdom of God is in the \
         midst of you. The renunciation asked of you clears room for something already near.",
        Some("Luke 17:20-21"),
        "What noise would have to quiet down for you to notice the kingdom already present?",
    );
    day(
        8,
        "Leaving the Nets",
        "Immediately they left their nets and followed him. The nets were not evil; they were \
         simply in the way.",
        Some("Matthew 4:20"),
        "What good thing might be in the way for you?",
    );
    day(
        9,
        "On Rash Judgment",
        "Turn your eyes back upon yourself, and see that you do not judge the doings of others. \
         In judging others a man toils in vain, but in judging himself he always labors fruitfully.",
        Some("Imitation of Christ, I.14"),
        "Whose faults do you rehearse more often than your own?",
    );
    day(
        10,
        "The Lilies of the Field",
        "Consider the lilies of the field, how they grow; they neither toil nor spin. Anxiety \
         about provision is one of the world's most respectable idols.",
        Some("Matthew 6:28"),
        "What worry would you be most relieved to hand over?",
    );
    day(
        11,
        "The Grain of Wheat",
        "Unless a grain of wheat falls into the earth and dies, it remains alone; but if it dies, \
         it bears much fruit. These days of emptying are a kind of planting.",
        Some("John 12:24"),
        "What has this emptying already loosened in you?",
    );
    day(
        12,
        "Emptied Hands",
        "The preliminary days close where they began: with open hands. What the world cannot fill, \
         grace can; tomorrow the gaze turns inward.",
        None,
        "Looking back over twelve days, what single renunciation mattered most?",
    );

    // ========================================================================
    // First Week (13-19): knowledge of self
    // ========================================================================

    day(
        13,
        "Knowledge of Self",
        "During this week we employ our prayers and examinations not in acquiring light on Mary, \
         but on ourselves: our emptiness, our incapacity for any good apart from God.",
        Some("True Devotion, §228"),
        "What do you actually know of yourself, apart from what others reflect back to you?",
    );
    day(
        14,
        "The Humble Heart",
        "Do not think yourself better than others, lest perhaps you be accounted worse before God, \
         who knows what is in man. Self-knowledge begins where comparison ends.",
        Some("Imitation of Christ, I.7"),
        "When did comparison last distort your view of yourself?",
    );
    day(
        15,
        "Our Wretchedness",
        "We are naturally prouder than peacocks, more grovelling than toads, more envious than \
         serpents. Montfort's catalogue is harsh medicine, meant to cure, not to crush.",
        Some("True Devotion, §79"),
        "Which line of that harsh catalogue lands closest to home?",
    );
    day(
        16,
        "The Prodigal's Return",
        "When he came to himself he said, 'I will arise and go to my father.' Coming to oneself \
         and turning home are a single motion.",
        Some("Luke 15:17-18"),
        "In what far country have you been spending yourself?",
    );
    day(
        17,
        "Distrust of Self",
        "Without me you can do nothing. Distrust of self is not despair; it is accuracy, and the \
         beginning of trust placed somewhere that can bear it.",
        Some("John 15:5"),
        "Where do you still quietly rely on your own strength alone?",
    );
    day(
        18,
        "The Publican's Prayer",
        "The tax collector, standing far off, would not even lift up his eyes to heaven, but beat \
         his breast, saying, 'God, be merciful to me, a sinner.' He went home justified.",
        Some("Luke 18:13-14"),
        "Can you pray those eight words and mean them?",
    );
    day(
        19,
        "Contrition",
        "A broken and contrite heart, O God, you will not despise. The week of self-knowledge ends \
         not in self-loathing but in sorrow that makes room for love.",
        Some("Psalm 51:17"),
        "What sorrow of this week do you want to carry forward, and what should you leave behind?",
    );

    // ========================================================================
    // Second Week (20-26): knowledge of Mary
    // ========================================================================

    day(
        20,
        "The Surest Way",
        "Mary is the safest, easiest, shortest and most perfect way of approaching Jesus. We give \
         ourselves to her to belong more perfectly to him.",
        Some("True Devotion, §55"),
        "What has made you hesitate to take a way described as easy?",
    );
    day(
        21,
        "Full of Grace",
        "Hail, full of grace, the Lord is with you. Grace filled her first; everything asked of \
         her afterward was asked of a heart already held.",
        Some("Luke 1:28"),
        "Do you act as though grace precedes what is asked of you, or follows it?",
    );
    day(
        22,
        "The Fiat",
        "Behold, I am the handmaid of the Lord; let it be to me according to your word. The whole \
         devotion is an echo of this single consent.",
        Some("Luke 1:38"),
        "What is the hardest 'let it be' being asked of you at present?",
    );
    day(
        23,
        "Mother and Mold",
        "Mary is the great mold of God. Whoever is cast in this divine mold is quickly formed \
         into Jesus Christ, faithfully and with little pain.",
        Some("True Devotion, §219-221"),
        "What in you resists being formed rather than self-made?",
    );
    day(
        24,
        "The Visitation",
        "Mary arose and went with haste into the hill country. The first thing grace did in her \
         was send her to serve someone else.",
        Some("Luke 1:39"),
        "Whom should your prayer this week send you toward?",
    );
    day(
        25,
        "Behold Your Mother",
        "Then he said to the disciple, 'Behold, your mother.' And from that hour the disciple took \
         her to his own home. The gift was given from the cross; it remains a gift to be taken.",
        Some("John 19:27"),
        "What would it mean, concretely, to take her into your own home?",
    );
    day(
        26,
        "Slavery of Love",
        "We give ourselves entirely, body and goods, interior and spiritual possessions, without \
         reserve. The word 'slavery' scandalizes until one notices it is how love already talks.",
        Some("True Devotion, §121"),
        "What do you still hold back 'in reserve', and from whom?",
    );

    // ========================================================================
    // Third Week (27-33): knowledge of Jesus Christ
    // ========================================================================

    day(
        27,
        "The Final End",
        "Jesus Christ our Savior, true God and true man, must be the final end of all our other \
         devotions; otherwise they would be false and misleading.",
        Some("True Devotion, §61"),
        "Has any means in your life quietly become an end?",
    );
    day(
        28,
        "The Word Made Flesh",
        "And the Word became flesh and dwelt among us, full of grace and truth. Everything this \
         program asks becomes possible because God first came near.",
        Some("John 1:14"),
        "Where has God come nearer to you than you expected this month?",
    );
    day(
        29,
        "Learn from Me",
        "Take my yoke upon you, and learn from me, for I am gentle and lowly in heart, and you \
         will find rest for your souls.",
        Some("Matthew 11:29"),
        "What has Jesus' gentleness taught you that severity never could?",
    );
    day(
        30,
        "The Way, the Truth, and the Life",
        "I am the way, and the truth, and the life; no one comes to the Father but by me. The \
         knowledge sought this week is not information but acquaintance.",
        Some("John 14:6"),
        "If you described Jesus only from personal acquaintance, what would you say?",
    );
    day(
        31,
        "The Cross",
        "If any man would come after me, let him deny himself and take up his cross daily. \
         Consecration is not decoration; it has a cost, and the cost is the shape of love.",
        Some("Luke 9:23"),
        "What daily cross are you being asked to stop resenting?",
    );
    day(
        32,
        "Abide in Me",
        "Abide in me, and I in you. As the branch cannot bear fruit by itself, unless it abides \
         in the vine, neither can you, unless you abide in me.",
        Some("John 15:4"),
        "What habit most helps you abide, and what most uproots you?",
    );
    day(
        33,
        "Nazareth",
        "Jesus chose to spend thirty hidden years at Nazareth, subject to Mary and Joseph. The eve \
         of consecration is a day for smallness, silence, and readiness.",
        Some("Luke 2:51"),
        "How will you keep tomorrow from being merely another day?",
    );

    // ========================================================================
    // Consecration Day (34)
    // ========================================================================

    day(
        34,
        "The Day of Consecration",
        "Today, after confession and communion if possible, make the act of consecration: give to \
         Jesus through Mary, wholly and forever, your body and soul, your goods and your merits. \
         Sign it, date it, and renew it every year on this feast.",
        Some("True Devotion, §231"),
        "You have arrived. What do you want to remember about this day a year from now?",
    );

    // ========================================================================
    // Prayers
    // ========================================================================

    let mut prayer = |id: &str, name: &str, latin: &str, english: &str| {
        prayers.insert(
            id.to_string(),
            Prayer {
                id: id.into(),
                name: name.into(),
                text: BilingualText::new(latin, english),
            },
        );
    };

    prayer(
        "veni_creator",
        "Veni Creator Spiritus",
        "Veni, Creator Spiritus,\n\
         mentes tuorum visita,\n\
         imple superna gratia,\n\
         quae tu creasti pectora.",
        "Come, Creator Spirit,\n\
         visit the minds of your own,\n\
         and fill with heavenly grace\n\
         the hearts that you have made.",
    );

    prayer(
        "ave_maris_stella",
        "Ave Maris Stella",
        "Ave, maris stella,\n\
         Dei Mater alma,\n\
         atque semper Virgo,\n\
         felix caeli porta.",
        "Hail, star of the sea,\n\
         loving Mother of God,\n\
         and ever Virgin,\n\
         happy gate of heaven.",
    );

    prayer(
        "magnificat",
        "Magnificat",
        "Magnificat anima mea Dominum,\n\
         et exsultavit spiritus meus\n\
         in Deo salutari meo,\n\
         quia respexit humilitatem ancillae suae:\n\
         ecce enim ex hoc beatam me dicent\n\
         omnes generationes.",
        "My soul magnifies the Lord,\n\
         and my spirit has rejoiced\n\
         in God my Savior,\n\
         for he has regarded the lowliness of his handmaid:\n\
         for behold, from henceforth\n\
         all generations shall call me blessed.",
    );

    prayer(
        "gloria_patri",
        "Gloria Patri",
        "Gloria Patri, et Filio,\n\
         et Spiritui Sancto.\n\
         Sicut erat in principio, et nunc, et semper,\n\
         et in saecula saeculorum. Amen.",
        "Glory be to the Father, and to the Son,\n\
         and to the Holy Spirit.\n\
         As it was in the beginning, is now, and ever shall be,\n\
         world without end. Amen.",
    );

    prayer(
        "litany_holy_spirit",
        "Litany of the Holy Spirit",
        "Kyrie, eleison.\n\
         Christe, eleison.\n\
         Spiritus Sancte, a Patre Filioque procedens, miserere nobis.\n\
         Spiritus Domini, Deus Israel, miserere nobis.\n\
         Dator omnium donorum, miserere nobis.\n\
         Spiritus sapientiae et intellectus, miserere nobis.",
        "Lord, have mercy.\n\
         Christ, have mercy.\n\
         Holy Spirit, proceeding from the Father and the Son, have mercy on us.\n\
         Spirit of the Lord, God of Israel, have mercy on us.\n\
         Giver of all gifts, have mercy on us.\n\
         Spirit of wisdom and understanding, have mercy on us.",
    );

    prayer(
        "litany_loreto",
        "Litany of Loreto",
        "Sancta Maria, ora pro nobis.\n\
         Sancta Dei Genetrix, ora pro nobis.\n\
         Sancta Virgo virginum, ora pro nobis.\n\
         Mater Christi, ora pro nobis.\n\
         Virgo fidelis, ora pro nobis.\n\
         Regina sine labe originali concepta, ora pro nobis.",
        "Holy Mary, pray for us.\n\
         Holy Mother of God, pray for us.\n\
         Holy Virgin of virgins, pray for us.\n\
         Mother of Christ, pray for us.\n\
         Virgin most faithful, pray for us.\n\
         Queen conceived without original sin, pray for us.",
    );

    prayer(
        "montfort_prayer_to_mary",
        "Prayer of St. Louis de Montfort to Mary",
        "Ave, Maria, Filia dilectissima Patris aeterni;\n\
         ave, Maria, Mater admirabilis Filii;\n\
         ave, Maria, Sponsa fidelissima Spiritus Sancti;\n\
         ave, Maria, Mater mea cara.",
        "Hail, Mary, most beloved daughter of the eternal Father;\n\
         hail, Mary, admirable Mother of the Son;\n\
         hail, Mary, most faithful Spouse of the Holy Spirit;\n\
         hail, Mary, my dear Mother.",
    );

    prayer(
        "o_jesus_living_in_mary",
        "O Jesus Living in Mary",
        "O Iesu in Maria vivens,\n\
         veni et vive in famulis tuis,\n\
         in spiritu sanctitatis tuae,\n\
         in plenitudine virtutis tuae.",
        "O Jesus living in Mary,\n\
         come and live in your servants,\n\
         in the spirit of your holiness,\n\
         in the fullness of your power.",
    );

    prayer(
        "consecration_act",
        "Act of Consecration",
        "Ego, N., peccator infidelis,\n\
         renovo et ratifico hodie in manibus tuis\n\
         vota baptismi mei;\n\
         renuntio in perpetuum Satanae et operibus eius,\n\
         et me totum Iesu Christo trado per Mariam.",
        "I, N., a faithless sinner,\n\
         renew and ratify today in your hands\n\
         the vows of my baptism;\n\
         I renounce forever Satan and his works,\n\
         and give myself entirely to Jesus Christ through Mary.",
    );

    Program { days, prayers }
}
