//! The shipped dataset: historical facts, recent milestones and predictions.
//!
//! Future predictions reflect what was expected in June 2020.

use std::sync::LazyLock;

use crate::builder::CatalogBuilder;
use crate::catalog::Catalog;

/// `(date, title, description)` as authored.
type RawEvent = (&'static str, &'static str, &'static str);

struct RawCategory {
    name: &'static str,
    events: &'static [RawEvent],
}

struct RawEra {
    name: &'static str,
    span: &'static str,
    categories: &'static [RawCategory],
}

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    builtin_builder()
        .build()
        .unwrap_or_else(|err| panic!("built-in event catalog is corrupt: {err}"))
});

impl Catalog {
    /// Returns the shipped catalog.
    ///
    /// Built and validated on first access; a data-entry error in the
    /// compiled-in dataset aborts with a diagnostic instead of producing an
    /// event with an invalid date.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }
}

fn builtin_builder() -> CatalogBuilder {
    let mut builder = CatalogBuilder::new();
    for era in ERAS {
        builder = builder.era(era.name, era.span);
        for category in era.categories {
            builder = builder.category(category.name);
            for &(date, title, description) in category.events {
                builder = builder.event(date, title, description);
            }
        }
    }
    builder
}

#[rustfmt::skip]
static ERAS: &[RawEra] = &[
    RawEra {
        name: "Past Events",
        span: "1500-2010",
        categories: &[
            RawCategory { name: "Ancient & Medieval History", events: &[
                ("1500-01-01", "Renaissance Era", "The Renaissance transforms European art, science, and culture"),
                ("1517-10-31", "Protestant Reformation", "Martin Luther posts 95 Theses, sparking religious reformation"),
                ("1543-05-24", "Heliocentric Theory", "Copernicus publishes revolutionary theory that Earth orbits the Sun"),
                ("1564-04-26", "Shakespeare Born", "William Shakespeare, the greatest English writer, is born"),
                ("1600-02-17", "Giordano Bruno Executed", "Philosopher burned for supporting Copernican heliocentrism"),
                ("1609-08-25", "Galileo's Telescope", "Galileo presents his telescope to Venetian lawmakers"),
                ("1687-07-05", "Newton's Principia", "Isaac Newton publishes laws of motion and universal gravitation"),
                ("1776-07-04", "US Independence", "United States Declaration of Independence adopted"),
                ("1789-07-14", "French Revolution", "Storming of the Bastille marks beginning of French Revolution"),
            ] },
            RawCategory { name: "Industrial Revolution", events: &[
                ("1712-01-01", "First Steam Engine", "Thomas Newcomen builds first practical steam engine for pumping water"),
                ("1769-01-01", "Watt's Steam Engine", "James Watt patents improved steam engine with separate condenser"),
                ("1793-03-14", "Cotton Gin Invented", "Eli Whitney invents cotton gin, revolutionizing textile industry"),
                ("1804-02-21", "First Steam Locomotive", "Richard Trevithick demonstrates first railway steam locomotive"),
                ("1825-09-27", "First Public Railway", "Stockton and Darlington Railway opens as first public railway"),
                ("1831-08-29", "Electromagnetic Induction", "Michael Faraday discovers electromagnetic induction"),
                ("1856-01-01", "Bessemer Steel Process", "Henry Bessemer patents mass steel production method"),
                ("1876-03-10", "Telephone Invented", "Alexander Graham Bell patents the telephone"),
                ("1879-10-21", "Electric Light Bulb", "Thomas Edison successfully tests incandescent light bulb"),
                ("1885-01-29", "First Automobile", "Karl Benz patents the first true gasoline-powered automobile"),
                ("1895-12-28", "First Film Screening", "Lumière brothers hold first public film screening in Paris"),
                ("1903-12-17", "First Powered Flight", "Wright Brothers achieve first controlled powered airplane flight"),
                ("1908-10-01", "Model T Production", "Ford begins mass production of affordable Model T automobile"),
                ("1913-12-01", "Assembly Line", "Henry Ford introduces moving assembly line, revolutionizing manufacturing"),
            ] },
            RawCategory { name: "World Wars Era", events: &[
                ("1914-06-28", "Archduke Assassination", "Assassination of Archduke Franz Ferdinand triggers WWI"),
                ("1914-07-28", "World War I Begins", "Austria-Hungary declares war on Serbia, starting WWI"),
                ("1917-04-06", "US Enters WWI", "United States declares war on Germany"),
                ("1918-11-11", "World War I Ends", "Armistice signed at 11am on 11/11, ending WWI"),
                ("1929-10-29", "Black Tuesday", "Stock market crash triggers the Great Depression"),
                ("1939-09-01", "World War II Begins", "Germany invades Poland, starting World War II"),
                ("1941-12-07", "Pearl Harbor Attack", "Japan attacks Pearl Harbor; US enters WWII"),
                ("1944-06-06", "D-Day Invasion", "Allied forces land on Normandy beaches"),
                ("1945-05-08", "Victory in Europe", "Nazi Germany surrenders unconditionally"),
                ("1945-08-06", "Hiroshima", "First atomic bomb used in warfare on Hiroshima"),
                ("1945-08-15", "WWII Ends", "Japan announces surrender, ending World War II"),
            ] },
            RawCategory { name: "Space Exploration", events: &[
                ("1957-10-04", "Sputnik 1 Launch", "Soviet Union launches first artificial satellite into orbit"),
                ("1961-04-12", "First Human in Space", "Yuri Gagarin becomes first human to journey into outer space"),
                ("1962-02-20", "Glenn Orbits Earth", "John Glenn becomes first American to orbit Earth"),
                ("1963-06-16", "First Woman in Space", "Valentina Tereshkova becomes first woman in space"),
                ("1969-07-20", "Moon Landing", "Neil Armstrong and Buzz Aldrin walk on the Moon"),
                ("1971-04-19", "First Space Station", "Soviet Union launches Salyut 1, first space station"),
                ("1981-04-12", "First Space Shuttle", "Columbia becomes first reusable spacecraft to reach orbit"),
                ("1986-01-28", "Challenger Disaster", "Space Shuttle Challenger breaks apart 73 seconds after launch"),
                ("1990-04-24", "Hubble Telescope", "Hubble Space Telescope deployed in Earth orbit"),
                ("1998-11-20", "ISS Construction", "First module of International Space Station launched"),
                ("2004-01-04", "Mars Rovers Land", "Spirit and Opportunity rovers begin Mars exploration"),
            ] },
            RawCategory { name: "Computing Revolution", events: &[
                ("1946-02-14", "ENIAC Unveiled", "ENIAC, first general-purpose electronic computer, is unveiled"),
                ("1947-12-23", "Transistor Invented", "Bell Labs demonstrates the first transistor"),
                ("1958-09-12", "Integrated Circuit", "Jack Kilby demonstrates first working integrated circuit"),
                ("1969-10-29", "ARPANET First Message", "First message sent over ARPANET, precursor to the Internet"),
                ("1971-11-15", "First Microprocessor", "Intel releases 4004, the first commercial microprocessor"),
                ("1975-04-04", "Microsoft Founded", "Bill Gates and Paul Allen found Microsoft"),
                ("1976-04-01", "Apple Founded", "Steve Jobs and Steve Wozniak found Apple Computer"),
                ("1981-08-12", "IBM PC Released", "IBM introduces the Personal Computer, defining the PC standard"),
                ("1983-01-01", "TCP/IP Adopted", "ARPANET adopts TCP/IP protocol, birth of modern Internet"),
                ("1984-01-24", "Macintosh Introduced", "Apple introduces the Macintosh with revolutionary GUI"),
                ("1989-03-12", "WWW Proposed", "Tim Berners-Lee proposes the World Wide Web"),
                ("1991-08-06", "World Wide Web Live", "First website goes live, making the web publicly available"),
                ("1995-08-24", "Windows 95", "Microsoft releases Windows 95, revolutionizing PC usage"),
                ("1998-09-04", "Google Founded", "Larry Page and Sergey Brin found Google Inc."),
                ("2004-02-04", "Facebook Launched", "Mark Zuckerberg launches Facebook from Harvard"),
                ("2007-01-09", "iPhone Unveiled", "Steve Jobs unveils iPhone, beginning the smartphone revolution"),
            ] },
            RawCategory { name: "Science & Medicine", events: &[
                ("1859-11-24", "Origin of Species", "Charles Darwin publishes theory of evolution by natural selection"),
                ("1895-11-08", "X-Rays Discovered", "Wilhelm Röntgen discovers X-rays"),
                ("1905-06-30", "Special Relativity", "Einstein publishes special theory of relativity (E=mc²)"),
                ("1928-09-28", "Penicillin Discovered", "Alexander Fleming discovers penicillin antibiotic"),
                ("1953-04-25", "DNA Structure", "Watson and Crick publish DNA double helix structure"),
                ("1967-12-03", "First Heart Transplant", "Dr. Christiaan Barnard performs first human heart transplant"),
                ("1978-07-25", "First IVF Baby", "Louise Brown, first test-tube baby, is born"),
                ("1996-07-05", "Dolly the Sheep", "First mammal cloned from an adult cell"),
                ("2003-04-14", "Human Genome Complete", "Human Genome Project completes mapping of human DNA"),
            ] },
            RawCategory { name: "Political & Social Milestones", events: &[
                ("1863-01-01", "Emancipation Proclamation", "Lincoln declares slaves in rebel states free"),
                ("1865-04-15", "Lincoln Assassinated", "President Abraham Lincoln is assassinated"),
                ("1893-09-19", "Women's Suffrage NZ", "New Zealand becomes first country with women's voting rights"),
                ("1920-08-26", "US Women Vote", "19th Amendment grants American women right to vote"),
                ("1947-08-15", "India Independence", "India gains independence from British rule"),
                ("1948-05-14", "Israel Founded", "State of Israel declared, recognized by major powers"),
                ("1963-08-28", "I Have a Dream", "Martin Luther King Jr. delivers iconic speech in Washington"),
                ("1964-07-02", "Civil Rights Act", "Landmark US legislation outlaws discrimination"),
                ("1989-11-09", "Berlin Wall Falls", "Fall of Berlin Wall symbolizes end of Cold War"),
                ("1990-02-11", "Mandela Released", "Nelson Mandela freed after 27 years in prison"),
                ("1991-12-26", "Soviet Union Dissolves", "USSR officially dissolves, ending the Cold War"),
                ("1994-04-27", "South Africa Democracy", "Nelson Mandela elected in first multi-racial election"),
            ] },
        ],
    },
    RawEra {
        name: "Present Era",
        span: "2010-2020",
        categories: &[
            RawCategory { name: "Technology Breakthroughs", events: &[
                ("2010-01-27", "iPad Announced", "Apple unveils iPad, creating modern tablet market"),
                ("2010-10-06", "Instagram Launched", "Photo-sharing app Instagram launches on iOS"),
                ("2011-10-05", "Steve Jobs Passes Away", "Apple co-founder Steve Jobs dies at age 56"),
                ("2012-04-09", "Facebook Buys Instagram", "Facebook acquires Instagram for $1 billion"),
                ("2012-05-18", "Facebook IPO", "Facebook goes public at $38 per share"),
                ("2013-11-15", "PlayStation 4 Released", "Sony releases next-gen gaming console"),
                ("2014-03-25", "Facebook Buys Oculus", "Facebook acquires Oculus VR for $2 billion"),
                ("2015-04-24", "Apple Watch Released", "Apple enters wearables market with Apple Watch"),
                ("2016-07-06", "Pokemon Go Released", "Augmented reality game becomes global phenomenon"),
                ("2017-11-03", "iPhone X Released", "Apple introduces Face ID and full-screen display"),
                ("2018-02-06", "SpaceX Falcon Heavy", "SpaceX launches most powerful rocket since Saturn V"),
                ("2019-04-10", "First Black Hole Image", "Event Horizon Telescope captures first black hole image"),
            ] },
            RawCategory { name: "AI & Machine Learning", events: &[
                ("2011-10-04", "Siri Introduced", "Apple introduces Siri voice assistant with iPhone 4S"),
                ("2012-06-26", "Google Brain", "Neural network learns to recognize cats from YouTube videos"),
                ("2014-01-26", "Google Buys DeepMind", "Google acquires AI company DeepMind for $500 million"),
                ("2015-12-11", "OpenAI Founded", "Elon Musk and others found AI research organization OpenAI"),
                ("2016-03-15", "AlphaGo Defeats Lee Sedol", "DeepMind's AI defeats world Go champion 4-1"),
                ("2017-05-27", "AlphaGo Retires", "AlphaGo defeats world #1 Ke Jie, then retires from competition"),
                ("2017-10-18", "AlphaGo Zero", "AI learns Go from scratch, surpasses all human knowledge"),
                ("2018-06-15", "GPT-1 Released", "OpenAI releases first Generative Pre-trained Transformer"),
                ("2019-02-14", "GPT-2 Announced", "OpenAI announces GPT-2, initially withholds full release"),
                ("2020-06-11", "GPT-3 Released", "OpenAI releases GPT-3 with 175 billion parameters"),
            ] },
            RawCategory { name: "World Events (2010-2020)", events: &[
                ("2010-04-20", "Deepwater Horizon", "BP oil spill becomes largest marine oil spill in history"),
                ("2011-03-11", "Fukushima Disaster", "Earthquake and tsunami cause nuclear disaster in Japan"),
                ("2011-05-02", "Bin Laden Killed", "US forces kill Al-Qaeda leader Osama bin Laden"),
                ("2012-08-06", "Curiosity on Mars", "NASA's Curiosity rover successfully lands on Mars"),
                ("2015-12-12", "Paris Climate Agreement", "195 nations adopt landmark climate change agreement"),
                ("2016-06-23", "Brexit Vote", "UK votes 52%-48% to leave the European Union"),
                ("2016-11-08", "Trump Elected", "Donald Trump wins US presidential election"),
                ("2018-06-12", "US-North Korea Summit", "Historic meeting between Trump and Kim Jong-un"),
                ("2019-12-31", "COVID-19 First Cases", "First cases of novel coronavirus reported in Wuhan, China"),
                ("2020-01-31", "UK Leaves EU", "United Kingdom officially exits the European Union"),
                ("2020-03-11", "COVID-19 Pandemic", "WHO declares COVID-19 a global pandemic"),
            ] },
        ],
    },
    RawEra {
        name: "Future Predictions",
        span: "from 2020",
        categories: &[
            RawCategory { name: "AI Revolution (Predicted)", events: &[
                ("2021-06-01", "AI Medical Diagnosis", "AI systems predicted to achieve doctor-level diagnosis accuracy"),
                ("2022-01-01", "AI Writing Tools", "Advanced AI writing assistants predicted for mainstream use"),
                ("2023-01-01", "AI Art Generation", "AI systems predicted to create professional-quality artwork"),
                ("2024-01-01", "AI Personal Assistants", "Highly capable AI assistants predicted for daily tasks"),
                ("2025-01-01", "AI in Education", "AI tutors predicted to revolutionize personalized learning"),
                ("2027-01-01", "AI-Human Collaboration", "AI predicted to become standard workplace collaborator"),
                ("2030-01-01", "AGI Progress", "Significant progress toward Artificial General Intelligence predicted"),
                ("2035-01-01", "AI Governance", "International AI regulation and ethics frameworks predicted"),
                ("2040-01-01", "AI Scientific Discovery", "AI predicted to independently make major scientific breakthroughs"),
                ("2050-01-01", "Human-AI Integration", "Deep integration between human cognition and AI predicted"),
            ] },
            RawCategory { name: "Quantum Computing (Predicted)", events: &[
                ("2021-01-01", "50+ Qubit Systems", "Quantum computers with 50+ stable qubits predicted"),
                ("2023-01-01", "100+ Qubit Milestone", "Quantum computers reaching 100+ qubits predicted"),
                ("2025-01-01", "Quantum Cloud Access", "Quantum computing predicted available via major cloud platforms"),
                ("2027-01-01", "Quantum Drug Discovery", "Quantum computers predicted to revolutionize pharmaceutical research"),
                ("2030-01-01", "Quantum Cryptography", "Quantum-safe encryption predicted to become industry standard"),
                ("2035-01-01", "Quantum Internet", "First experimental quantum internet networks predicted"),
                ("2040-01-01", "Quantum Advantage", "Quantum computers predicted to solve previously impossible problems"),
                ("2050-01-01", "Universal Quantum Computing", "General-purpose quantum computers predicted for widespread use"),
            ] },
            RawCategory { name: "Space Exploration (Predicted)", events: &[
                ("2021-02-01", "Mars Perseverance", "NASA Perseverance rover predicted to land on Mars"),
                ("2021-12-01", "James Webb Telescope", "Next-generation space telescope predicted to launch"),
                ("2024-01-01", "Artemis Moon Mission", "NASA predicted to return humans to the Moon"),
                ("2025-01-01", "Commercial Space Stations", "Private space stations predicted to begin operations"),
                ("2026-01-01", "SpaceX Starship to Mars", "SpaceX predicted to send Starship toward Mars"),
                ("2028-01-01", "Lunar Gateway", "Orbital lunar station predicted to be operational"),
                ("2030-01-01", "First Humans on Mars", "SpaceX or NASA predicted to land humans on Mars"),
                ("2035-01-01", "Permanent Moon Base", "Permanent human presence on the Moon predicted"),
                ("2040-01-01", "Mars Colony Started", "First permanent Mars settlement predicted to begin"),
                ("2050-01-01", "Regular Mars Travel", "Regular Earth-Mars transportation predicted"),
            ] },
            RawCategory { name: "AI Chips & Hardware (Predicted)", events: &[
                ("2021-01-01", "Neural Processing Units", "Dedicated AI chips predicted in most new smartphones"),
                ("2022-01-01", "AI-Optimized GPUs", "Next-gen GPUs with enhanced AI capabilities predicted"),
                ("2023-01-01", "Edge AI Devices", "Powerful AI processing in small devices predicted"),
                ("2025-01-01", "AI Chips Everywhere", "Specialized AI processors predicted in all smart devices"),
                ("2027-01-01", "Neuromorphic Chips", "Brain-inspired computing chips predicted for commercial use"),
                ("2030-01-01", "AI Supercomputers", "Exascale AI-dedicated supercomputers predicted"),
                ("2035-01-01", "Quantum-AI Hybrid", "Quantum-classical hybrid AI processors predicted"),
                ("2040-01-01", "Molecular Computing", "Molecular-scale computing elements predicted"),
            ] },
            RawCategory { name: "Society & Environment (Predicted)", events: &[
                ("2022-01-01", "Remote Work Standard", "Remote work predicted to become permanent for many jobs"),
                ("2025-01-01", "Electric Vehicles Dominant", "EVs predicted to outsell gasoline vehicles in major markets"),
                ("2027-01-01", "Renewable Energy Majority", "Renewables predicted to provide majority of new electricity"),
                ("2030-01-01", "Smart Cities", "AI-managed smart cities predicted in major metropolitan areas"),
                ("2035-01-01", "Carbon Capture", "Large-scale carbon capture technology predicted to operate"),
                ("2040-01-01", "Fusion Power Progress", "Commercial nuclear fusion power plants predicted"),
                ("2050-01-01", "Net Zero Progress", "Many developed nations predicted to achieve net-zero emissions"),
            ] },
        ],
    },
];
